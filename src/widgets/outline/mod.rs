//! Outline widget
//!
//! Flat list of the loaded graph and its nodes; drives selection

pub mod outline_events;
mod outline_ui;

pub use outline_ui::render;
