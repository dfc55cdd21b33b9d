//! UI Widgets - modular, reusable UI components
//!
//! Each widget renders into its panel and communicates via events

pub mod actions;
pub mod header;
pub mod outline;
pub mod properties;

pub use actions::ActionQueue;
