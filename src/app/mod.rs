//! Application module - FlowpadApp and related functionality.
//!
//! This module organizes the main application logic into focused submodules:
//! - `events` - Event handling (handle_events, handle_keyboard_input)
//! - `run` - eframe::App implementation (per-frame update, persistence)
//! - `workflow_io` - Workflow document loading and saving

mod events;
mod run;
mod workflow_io;

use log::warn;
use uuid::Uuid;

use crate::core::event_bus::EventBus;
use crate::dialogs::PreviewDialog;
use crate::entities::Workflow;
use crate::widgets::properties::PropertiesPanel;

/// Main application state.
///
/// Panel layout knobs and theme persist across sessions. The document and
/// everything derived from it are runtime state, rebuilt at launch from
/// the CLI argument or the bundled demo.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FlowpadApp {
    /// Loaded workflow document
    #[serde(skip)]
    pub workflow: Workflow,
    /// Right-side properties panel
    pub panel: PropertiesPanel,
    pub dark_mode: bool,
    pub font_size: f32,
    /// Message for the bottom status bar
    #[serde(skip)]
    pub status_msg: Option<String>,
    /// Preview dialog, present while show_preview
    #[serde(skip)]
    pub preview: Option<PreviewDialog>,
    #[serde(skip)]
    pub show_preview: bool,
    /// Global event bus for application-wide events
    #[serde(skip)]
    pub event_bus: EventBus,
    /// Hover states for input routing
    #[serde(skip)]
    pub outline_hovered: bool,
    #[serde(skip)]
    pub properties_hovered: bool,
}

impl Default for FlowpadApp {
    fn default() -> Self {
        Self {
            workflow: Workflow::demo(),
            panel: PropertiesPanel::default(),
            dark_mode: true,
            font_size: 14.0,
            status_msg: None,
            preview: None,
            show_preview: false,
            event_bus: EventBus::new(),
            outline_hovered: false,
            properties_hovered: false,
        }
    }
}

impl FlowpadApp {
    /// Put graph-scope properties into the panel.
    pub fn select_graph(&mut self) {
        self.panel.set_graph_data(
            self.workflow.id,
            self.workflow.title.clone(),
            self.workflow.graph_parameters(),
        );
    }

    /// Put one node into the panel. Unknown ids leave the selection alone.
    pub fn select_node(&mut self, node_id: Uuid) {
        match self.workflow.node(&node_id) {
            Some(node) => self.panel.set_node_data(self.workflow.id, node),
            None => warn!("Selection for unknown node {node_id} ignored"),
        }
    }
}
