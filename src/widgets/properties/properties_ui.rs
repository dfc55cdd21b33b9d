//! Properties panel - UI rendering
//!
//! Renders whatever [`PropertiesPanel`] currently holds: a header line,
//! the parameter table and, in read-only mode, the Outputs and Logs
//! sections. All interaction leaves as events on the returned queue;
//! the only state mutated here is the panel's own snapshot (local echo
//! of committed edits) and its column width.

use eframe::egui::{self, Pos2, Rect, Sense, Stroke, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use super::properties::{OutputRow, PanelHeader, PropertiesPanel};
use super::properties_events::*;
use super::{output_item, param_item};
use crate::entities::ParamValue;
use crate::widgets::actions::ActionQueue;

/// Render the panel. Returns queued events plus hover state for input routing.
pub fn render(ui: &mut Ui, panel: &mut PropertiesPanel) -> ActionQueue {
    let mut actions = ActionQueue::new();

    // Full-rect hover tracking
    let panel_rect = ui.available_rect_before_wrap();
    let panel_response =
        ui.interact(panel_rect, ui.id().with("properties_panel"), egui::Sense::hover());

    let Some(header) = panel.header() else {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(ui.visuals().weak_text_color(), "Nothing selected");
            ui.colored_label(
                ui.visuals().weak_text_color(),
                "Pick the graph or a node in the outline",
            );
        });
        actions.hovered = panel_response.hovered();
        return actions;
    };

    render_header(ui, &header, &mut actions);
    ui.separator();

    let scroll_height = ui.available_height();
    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        ui.set_min_height(scroll_height);

        render_parameters(ui, panel, &mut actions);

        if panel.shows_outputs() {
            render_records(ui, "Outputs", &panel.output_rows(), panel.config.preview_enabled, &mut actions);
        }
        if panel.shows_logs() {
            render_records(ui, "Logs", &panel.log_rows(), panel.config.preview_enabled, &mut actions);
        }
    });

    actions.hovered = panel_response.hovered();
    actions
}

fn render_header(ui: &mut Ui, header: &PanelHeader, actions: &mut ActionQueue) {
    ui.horizontal(|ui| match header {
        PanelHeader::Graph { title } | PanelHeader::Static { title } => {
            ui.strong(title);
        }
        PanelHeader::ShowFile { title, node_id } => {
            if ui.link(title).on_hover_text("Preview this file").clicked() {
                actions.send(ShowFileEvent(*node_id));
            }
        }
        PanelHeader::OpenParent { title, parent_id } => {
            if ui.link(title).on_hover_text("Open original node").clicked() {
                actions.send(OpenNodeEvent(*parent_id));
            }
        }
    });
}

fn render_parameters(ui: &mut Ui, panel: &mut PropertiesPanel, actions: &mut ActionQueue) {
    let rows = panel.parameter_rows();
    if rows.is_empty() {
        ui.label("(no parameters)");
        return;
    }

    // Scope captured before rendering: commits below belong to the
    // selection the rows were derived from.
    let scope = panel.edit_scope();

    let row_height = ui
        .text_style_height(&TextStyle::Body)
        .max(ui.spacing().interact_size.y);

    // Clamp width bounds
    let available_width = ui.available_width();
    let min_label = 100.0;
    let max_label = (available_width - 120.0).max(min_label);
    panel.name_column_width = panel.name_column_width.clamp(min_label, max_label);

    // Track top to draw splitter across table height later
    let table_top = ui.cursor().min;

    let mut committed: Vec<(String, ParamValue)> = Vec::new();
    let buffers = &mut panel.edit_buffers;

    TableBuilder::new(ui)
        .id_salt("properties_table")
        .striped(true)
        .column(
            Column::initial(panel.name_column_width)
                .range(min_label..=max_label)
                .resizable(false),
        )
        .column(Column::remainder())
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("Parameter");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for row in &rows {
                let height = match row.value {
                    // multiline editors get three text rows
                    ParamValue::Text(_) => row_height * 3.2,
                    _ => row_height,
                };
                body.row(height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(format!("{}:", row.alias));
                    });
                    table_row.col(|ui| {
                        if let Some(value) = param_item::render(ui, row, buffers) {
                            committed.push((row.name.clone(), value));
                        }
                    });
                });
            }
        });

    // Interactive splitter spanning header + body
    let table_bottom = ui.cursor().min;
    let x = table_top.x + panel.name_column_width;
    let splitter_rect = Rect::from_min_max(
        Pos2::new(x - 4.0, table_top.y),
        Pos2::new(x + 4.0, table_bottom.y),
    );
    let splitter_id = ui.make_persistent_id("properties_splitter_drag");
    let response = ui.interact(splitter_rect, splitter_id, Sense::click_and_drag());
    if response.dragged() {
        panel.name_column_width =
            (panel.name_column_width + response.drag_delta().x).clamp(min_label, max_label);
    }
    let stroke = if response.hovered() || response.dragged() {
        Stroke::new(2.0, ui.visuals().strong_text_color())
    } else {
        Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
    };
    ui.painter().line_segment(
        [Pos2::new(x, table_top.y), Pos2::new(x, table_bottom.y)],
        stroke,
    );

    for (name, value) in committed {
        panel.apply_local_edit(&name, &value);
        actions.send(ParameterEditedEvent { node_id: scope, name, value });
    }
}

fn render_records(
    ui: &mut Ui,
    heading: &str,
    rows: &[OutputRow],
    preview_enabled: bool,
    actions: &mut ActionQueue,
) {
    ui.add_space(8.0);
    ui.strong(heading);
    ui.separator();
    for row in rows {
        if output_item::render(ui, row, preview_enabled) {
            actions.send(PreviewRequestedEvent(PreviewPayload::from_row(row)));
        }
    }
}
