//! Modal dialogs.

pub mod modal;
pub mod preview;

pub use modal::ModalShell;
pub use preview::PreviewDialog;
