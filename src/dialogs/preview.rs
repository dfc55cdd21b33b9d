//! Resource preview dialog.
//!
//! Shows the descriptor of a materialized output or log. Resource bytes
//! live with the execution backend; the inspector presents what the
//! document records about them.

use eframe::egui;

use crate::dialogs::modal::ModalShell;
use crate::entities::WorkflowNode;
use crate::widgets::properties::properties_events::PreviewPayload;

pub struct PreviewDialog {
    shell: ModalShell,
    payload: PreviewPayload,
}

impl PreviewDialog {
    /// Preview one output or log row.
    pub fn resource(payload: PreviewPayload) -> Self {
        Self {
            shell: ModalShell::new(format!("Preview: {}", payload.name), [520.0, 260.0]),
            payload,
        }
    }

    /// Preview a file node's own materialized file (header click).
    /// None when nothing materialized yet.
    pub fn file_node(node: &WorkflowNode) -> Option<Self> {
        let output = node.outputs.iter().find(|o| o.resource_id.is_some())?;
        let resource_id = output.resource_id.clone()?;
        Some(Self::resource(PreviewPayload {
            node_id: node.id,
            name: node.title.clone(),
            resource_id,
            file_type: output.file_type.clone(),
        }))
    }

    /// Render while `*open`; the shell clears it on dismiss.
    pub fn render(&mut self, ctx: &egui::Context, open: &mut bool) {
        let payload = self.payload.clone();
        self.shell.show(ctx, open, |ui| {
            descriptor_row(ui, "Name", &payload.name);
            descriptor_row(ui, "Kind", payload.file_type.name());
            descriptor_row(ui, "Resource", &payload.resource_id);
            descriptor_row(ui, "Node", &payload.node_id.to_string());
            ui.add_space(8.0);
            ui.weak("Stored with the execution backend.");
        });
    }
}

fn descriptor_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        ui.monospace(value);
    });
}
