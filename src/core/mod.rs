//! Core modules - event plumbing, independent of UI.

pub mod event_bus;

// Re-exports for convenience
pub use event_bus::{BoxedEvent, EventBus, EventEmitter, downcast_event};
