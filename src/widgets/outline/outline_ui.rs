//! Outline - flat list of the graph and its nodes.
//!
//! The controller surface of the app: clicking rows here decides what the
//! properties panel inspects. Also hosts document open/save.

use eframe::egui;
use uuid::Uuid;

use crate::entities::{Workflow, keys};
use crate::widgets::actions::ActionQueue;
use crate::widgets::outline::outline_events::*;

/// Render the outline. `selected_node`/`graph_selected` drive row highlight.
pub fn render(
    ui: &mut egui::Ui,
    workflow: &Workflow,
    selected_node: Option<Uuid>,
    graph_selected: bool,
) -> ActionQueue {
    let mut actions = ActionQueue::new();

    // Full-rect hover and click tracking
    let panel_rect = ui.available_rect_before_wrap();
    let panel_response =
        ui.interact(panel_rect, ui.id().with("outline_panel"), egui::Sense::click());

    // Action buttons
    ui.horizontal(|ui| {
        if ui.button("Open").clicked()
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("Workflow", &["json"])
                .set_title("Open Workflow")
                .pick_file()
        {
            actions.send(LoadWorkflowEvent(path));
        }
        if ui.button("Save").clicked()
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("Workflow", &["json"])
                .set_title("Save Workflow")
                .set_file_name("workflow.json")
                .save_file()
        {
            actions.send(SaveWorkflowEvent(path));
        }
        ui.separator();
        if ui.button("Demo").clicked() {
            actions.send(LoadDemoEvent);
        }
    });

    ui.separator();

    // Row list fills remaining space
    let scroll_height = ui.available_height();
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_min_height(scroll_height);

            let graph_info = format!("{} node(s)", workflow.nodes.len());
            if render_row(
                ui,
                "[G]",
                egui::Color32::from_rgb(255, 200, 100), // Orange for the graph itself
                &workflow.title,
                &graph_info,
                graph_selected,
            ) {
                actions.send(SelectGraphEvent);
            }
            ui.add_space(4.0);

            for node in workflow.nodes.values() {
                let (icon, icon_color) = if node.base_node_name == keys::NODE_FILE {
                    ("[F]", egui::Color32::from_rgb(100, 180, 100)) // Green for files
                } else {
                    ("[O]", egui::Color32::from_rgb(100, 150, 255)) // Blue for operations
                };
                let right_text =
                    format!("{}p {}o", node.parameters.len(), node.outputs.len());
                if render_row(
                    ui,
                    icon,
                    icon_color,
                    &node.title,
                    &right_text,
                    selected_node == Some(node.id),
                ) {
                    actions.send(SelectNodeEvent(node.id));
                }
                ui.add_space(1.0);
            }
        });

    // Click on empty area drops the selection
    if panel_response.clicked() {
        actions.send(ClearSelectionEvent);
    }

    // Set hover state for input routing
    actions.hovered = panel_response.hovered();

    actions
}

/// Paint one row; returns true when clicked.
fn render_row(
    ui: &mut egui::Ui,
    icon: &str,
    icon_color: egui::Color32,
    title: &str,
    right_text: &str,
    selected: bool,
) -> bool {
    let available_width = ui.available_width();
    let row_height = ui.spacing().interact_size.y * 1.2;

    let (row_rect, response) =
        ui.allocate_exact_size(egui::vec2(available_width, row_height), egui::Sense::click());

    let bg_color = if selected {
        ui.style().visuals.selection.bg_fill
    } else {
        ui.style().visuals.faint_bg_color
    };
    ui.painter().rect_filled(row_rect, 2.0, bg_color);
    ui.painter().rect_stroke(
        row_rect,
        2.0,
        egui::Stroke::new(1.0, ui.style().visuals.window_stroke.color),
        egui::StrokeKind::Inside,
    );

    let mut cursor_x = row_rect.min.x + 8.0;
    let center_y = row_rect.center().y;

    // Icon
    let icon_galley = ui.painter().layout_no_wrap(
        icon.to_string(),
        egui::FontId::proportional(12.0),
        icon_color,
    );
    let icon_pos = egui::pos2(cursor_x, center_y - icon_galley.size().y * 0.5);
    ui.painter().galley(icon_pos, icon_galley, icon_color);
    cursor_x += 22.0;

    // Right info
    let right_galley = ui.painter().layout_no_wrap(
        right_text.to_string(),
        egui::FontId::proportional(12.0),
        ui.visuals().weak_text_color(),
    );
    let right_pos = egui::pos2(
        row_rect.max.x - 8.0 - right_galley.size().x,
        center_y - right_galley.size().y * 0.5,
    );

    // Title, clipped to the space left of the right info
    let text_max_width = (right_pos.x - 8.0) - cursor_x;
    if text_max_width > 0.0 {
        let text_galley = ui.painter().layout_no_wrap(
            title.to_string(),
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
        let text_pos = egui::pos2(cursor_x, center_y - text_galley.size().y * 0.5);
        let clip_rect =
            egui::Rect::from_min_size(text_pos, egui::vec2(text_max_width, row_height));
        ui.painter().with_clip_rect(clip_rect).galley(
            text_pos,
            text_galley,
            ui.visuals().text_color(),
        );
    }

    ui.painter().galley(right_pos, right_galley, ui.visuals().weak_text_color());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response.clicked()
}
