//! Main application loop - eframe::App implementation.

use eframe::egui;
use log::trace;

use crate::app::FlowpadApp;
use crate::widgets::{header, outline, properties};

impl eframe::App for FlowpadApp {
    /// Main frame update - called every frame by eframe.
    ///
    /// Flow:
    /// 1. Apply theme and font settings
    /// 2. Handle dropped files
    /// 3. Render UI (header, status bar, panels)
    /// 4. Handle keyboard input
    /// 5. Process queued events
    /// 6. Render the preview dialog
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme based on settings
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Apply font size to all text styles
        let mut style = (*ctx.style()).clone();
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size = self.font_size;
        }
        ctx.set_style(style);

        // Drag-and-drop: open the first dropped file as a document
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .next()
        });
        if let Some(path) = dropped {
            log::info!("File dropped: {}", path.display());
            self.load_workflow(path);
        }

        egui::TopBottomPanel::top("header_bar").show(ctx, |ui| {
            header::render(ui, &self.workflow.title, !self.panel.config.editable)
                .dispatch(&self.event_bus);
        });

        if let Some(msg) = self.status_msg.clone() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.monospace(&msg);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            self.status_msg = None;
                        }
                    });
                });
            });
        }

        egui::SidePanel::right("properties_side")
            .default_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                let actions = properties::render(ui, &mut self.panel);
                self.properties_hovered = actions.hovered;
                actions.dispatch(&self.event_bus);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let actions = outline::render(
                ui,
                &self.workflow,
                self.panel.selected_node(),
                self.panel.graph_selected(),
            );
            self.outline_hovered = actions.hovered;
            actions.dispatch(&self.event_bus);
        });

        // After panels so hover states are fresh
        self.handle_keyboard_input(ctx);

        // Apply queued widget events; a preview requested this frame opens this frame
        self.handle_events();

        if self.show_preview && let Some(ref mut dialog) = self.preview {
            dialog.render(ctx, &mut self.show_preview);
            if !self.show_preview {
                trace!("Preview dialog closed");
                self.preview = None;
            }
        }
    }

    /// Save app state to persistent storage.
    /// Called periodically by eframe (typically every 30 seconds and on exit).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!(
                "App state saved: dark_mode={}, font_size={}",
                self.dark_mode, self.font_size
            );
        }
    }
}
