//! Header bar widget
//!
//! Application title row with navigation back to graph scope

pub mod header_events;
mod header_ui;

pub use header_ui::render;
