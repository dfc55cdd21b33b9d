//! Properties panel events.
//!
//! Kept separate to mirror other widget event modules and keep routing consistent.

use uuid::Uuid;

use crate::entities::{FileType, ParamValue};
use crate::widgets::properties::OutputRow;

/// Emitted when a parameter edit commits. `node_id == None` targets the
/// graph scope. Forwarded verbatim; the panel does not interpret it.
#[derive(Clone, Debug)]
pub struct ParameterEditedEvent {
    pub node_id: Option<Uuid>,
    pub name: String,
    pub value: ParamValue,
}

/// What a preview request points at.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewPayload {
    pub node_id: Uuid,
    pub name: String,
    pub resource_id: String,
    pub file_type: FileType,
}

impl PreviewPayload {
    pub fn from_row(row: &OutputRow) -> Self {
        Self {
            node_id: row.node_id,
            name: row.name.clone(),
            resource_id: row.resource_id.clone(),
            file_type: row.file_type.clone(),
        }
    }
}

/// Emitted when the user asks to preview an output or log resource.
#[derive(Clone, Debug)]
pub struct PreviewRequestedEvent(pub PreviewPayload);

/// Emitted when the header of a file node is clicked: preview the node's
/// own materialized file.
#[derive(Clone, Debug)]
pub struct ShowFileEvent(pub Uuid);

/// Emitted when the header link of an instantiated node is clicked:
/// navigate to the node it was created from.
#[derive(Clone, Debug)]
pub struct OpenNodeEvent(pub Uuid);
