//! Event handling for FlowpadApp.

use std::path::PathBuf;

use eframe::egui;
use log::{info, trace, warn};

use super::FlowpadApp;
use crate::core::event_bus::downcast_event;
use crate::dialogs::PreviewDialog;
use crate::widgets::header::header_events::GraphHomeEvent;
use crate::widgets::outline::outline_events::{
    ClearSelectionEvent, LoadDemoEvent, LoadWorkflowEvent, SaveWorkflowEvent, SelectGraphEvent,
    SelectNodeEvent,
};
use crate::widgets::properties::properties_events::{
    OpenNodeEvent, ParameterEditedEvent, PreviewRequestedEvent, ShowFileEvent,
};

impl FlowpadApp {
    /// Drain the bus and apply state changes outside the render pass.
    pub fn handle_events(&mut self) {
        // Deferred document actions, executed after the event loop
        let mut deferred_load: Option<PathBuf> = None;
        let mut deferred_save: Option<PathBuf> = None;
        let mut deferred_demo = false;

        let events = self.event_bus.poll();
        for event in events {
            // ========== Selection ==========
            if downcast_event::<SelectGraphEvent>(&event).is_some() {
                self.select_graph();
                continue;
            }
            if downcast_event::<GraphHomeEvent>(&event).is_some() {
                self.select_graph();
                continue;
            }
            if let Some(e) = downcast_event::<SelectNodeEvent>(&event) {
                self.select_node(e.0);
                continue;
            }
            if downcast_event::<ClearSelectionEvent>(&event).is_some() {
                self.panel.clear();
                continue;
            }

            // ========== Edits ==========
            if let Some(e) = downcast_event::<ParameterEditedEvent>(&event) {
                trace!("Parameter '{}' edited (node: {:?})", e.name, e.node_id);
                if !self.workflow.set_parameter(e.node_id, &e.name, e.value.clone()) {
                    warn!("Edit of '{}' did not match the document", e.name);
                }
                continue;
            }

            // ========== Preview and navigation ==========
            if let Some(e) = downcast_event::<PreviewRequestedEvent>(&event) {
                trace!("Preview requested for '{}'", e.0.name);
                self.preview = Some(PreviewDialog::resource(e.0.clone()));
                self.show_preview = true;
                continue;
            }
            if let Some(e) = downcast_event::<ShowFileEvent>(&event) {
                match self.workflow.node(&e.0).and_then(PreviewDialog::file_node) {
                    Some(dialog) => {
                        self.preview = Some(dialog);
                        self.show_preview = true;
                    }
                    None => {
                        info!("File node {} has no materialized resource", e.0);
                        self.status_msg = Some("Nothing materialized to preview yet".to_string());
                    }
                }
                continue;
            }
            if let Some(e) = downcast_event::<OpenNodeEvent>(&event) {
                if self.workflow.node(&e.0).is_some() {
                    self.select_node(e.0);
                } else {
                    warn!("Parent node {} is not part of this document", e.0);
                    self.status_msg = Some("Parent node lives outside this document".to_string());
                }
                continue;
            }

            // ========== Document I/O ==========
            if let Some(e) = downcast_event::<LoadWorkflowEvent>(&event) {
                deferred_load = Some(e.0.clone());
                continue;
            }
            if let Some(e) = downcast_event::<SaveWorkflowEvent>(&event) {
                deferred_save = Some(e.0.clone());
                continue;
            }
            if downcast_event::<LoadDemoEvent>(&event).is_some() {
                deferred_demo = true;
                continue;
            }
        }

        // Execute deferred actions
        if let Some(path) = deferred_load {
            self.load_workflow(path);
        }
        if let Some(path) = deferred_save {
            self.save_workflow(path);
        }
        if deferred_demo {
            self.load_demo();
        }
    }

    /// Esc closes the preview first, then the app.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.show_preview {
                self.show_preview = false;
                self.preview = None;
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
