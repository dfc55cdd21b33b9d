//! Single output/log row with an optional preview link.

use eframe::egui::{self, Ui};

use super::properties::OutputRow;
use crate::entities::FileType;

/// Render one output or log row. Returns true when the user asked to
/// preview it (never when preview is disabled).
pub fn render(ui: &mut Ui, row: &OutputRow, preview_enabled: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        let (tag, color) = type_tag(&row.file_type);
        ui.colored_label(color, tag).on_hover_text(row.file_type.name());

        if preview_enabled {
            if ui.link(&row.name).on_hover_text(&row.resource_id).clicked() {
                clicked = true;
            }
        } else {
            ui.label(&row.name);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(&row.resource_id);
        });
    });
    clicked
}

fn type_tag(file_type: &FileType) -> (&'static str, egui::Color32) {
    match file_type {
        FileType::File => ("[F]", egui::Color32::from_rgb(150, 150, 150)), // Gray for plain files
        FileType::Image => ("[I]", egui::Color32::from_rgb(100, 150, 255)), // Blue for images
        FileType::Csv => ("[C]", egui::Color32::from_rgb(100, 180, 100)),  // Green for tables
        FileType::Json => ("[J]", egui::Color32::from_rgb(255, 200, 100)), // Orange for json
        FileType::Executable => ("[X]", egui::Color32::from_rgb(220, 120, 120)), // Red for executables
        FileType::Directory => ("[D]", egui::Color32::from_rgb(200, 150, 255)), // Purple for directories
        FileType::Other(_) => ("[?]", egui::Color32::from_rgb(150, 150, 150)),
    }
}
