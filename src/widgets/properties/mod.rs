//! Properties panel widget
//!
//! Inspector for the current selection: parameter editors plus, in
//! read-only mode, the node's materialized outputs and logs.

mod output_item;
mod param_item;
mod properties;
pub mod properties_events;
mod properties_ui;

pub use properties::{
    GraphSelection, NodeSelection, OutputRow, PanelConfig, PanelHeader, ParameterRow,
    PropertiesPanel, Selection,
};
pub use properties_ui::render;
