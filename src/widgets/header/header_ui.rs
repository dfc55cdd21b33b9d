//! Top bar - application name, workflow title, mode badge.

use eframe::egui::{self, Ui};

use super::header_events::GraphHomeEvent;
use crate::widgets::actions::ActionQueue;

/// Render the top bar. The workflow title doubles as the way back to
/// graph-scope properties.
pub fn render(ui: &mut Ui, workflow_title: &str, read_only: bool) -> ActionQueue {
    let mut actions = ActionQueue::new();

    ui.horizontal(|ui| {
        ui.strong("Flowpad");
        ui.separator();
        if ui.link(workflow_title).on_hover_text("Show graph properties").clicked() {
            actions.send(GraphHomeEvent);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if read_only {
                ui.colored_label(egui::Color32::from_rgb(255, 200, 100), "read-only"); // Orange badge
            }
        });
    });

    actions
}
