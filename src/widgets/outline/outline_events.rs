//! Outline events.

use std::path::PathBuf;
use uuid::Uuid;

/// Emitted when the graph row is clicked: inspect graph-scope properties.
#[derive(Clone, Debug)]
pub struct SelectGraphEvent;

/// Emitted when a node row is clicked.
#[derive(Clone, Debug)]
pub struct SelectNodeEvent(pub Uuid);

/// Emitted when empty outline space is clicked: drop the selection.
#[derive(Clone, Debug)]
pub struct ClearSelectionEvent;

/// Emitted when the user picked a workflow file to open.
#[derive(Clone, Debug)]
pub struct LoadWorkflowEvent(pub PathBuf);

/// Emitted when the user picked a destination for the current document.
#[derive(Clone, Debug)]
pub struct SaveWorkflowEvent(pub PathBuf);

/// Emitted when the user asked for the bundled sample document.
#[derive(Clone, Debug)]
pub struct LoadDemoEvent;
