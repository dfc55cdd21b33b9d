//! Header bar events.

/// Emitted when the workflow title in the top bar is clicked: put the
/// graph-scope properties back into the panel.
#[derive(Clone, Debug)]
pub struct GraphHomeEvent;
