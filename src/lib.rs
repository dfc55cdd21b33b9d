//! FLOWPAD - Workflow properties editor library
//!
//! Re-exports all modules for use by binary targets.

// Core plumbing (event bus)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod dialogs;
pub mod entities;
pub mod widgets;

// Re-export commonly used types from core
pub use crate::core::event_bus::{BoxedEvent, EventBus, EventEmitter, downcast_event};

// Re-export entities
pub use entities::{OutputRecord, ParamValue, Parameter, Workflow, WorkflowNode};
