//! Entities module - document model kept free of GUI code
//!
//! Everything the panels render lives here: workflow documents, their
//! nodes, typed parameters and output/log records, plus the raw on-disk
//! records they are parsed from. Widgets only borrow these types.

pub mod keys;
pub mod output;
pub mod parameter;
pub mod records;
pub mod workflow;

pub use output::{FileType, OutputRecord};
pub use parameter::{ParamValue, Parameter, Widget};
pub use records::{RawWorkflow, load_workflow, save_workflow};
pub use workflow::{Workflow, WorkflowNode};
