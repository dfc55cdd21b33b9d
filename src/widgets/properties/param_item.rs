//! Value editor for one parameter row.

use std::collections::HashMap;

use eframe::egui::{self, ComboBox, TextEdit, Ui};

use super::properties::ParameterRow;
use crate::entities::ParamValue;

/// Render the editor for `row`, returning a value once an edit commits.
///
/// String editors keep the typed text in `buffers` while focused and
/// commit on focus loss (Enter or clicking away), so mid-edit frames never
/// leak half-typed values. Toggle, number and choice editors commit per
/// change. Read-only rows render disabled and never commit.
pub fn render(
    ui: &mut Ui,
    row: &ParameterRow,
    buffers: &mut HashMap<String, String>,
) -> Option<ParamValue> {
    let mut committed = None;
    ui.add_enabled_ui(!row.read_only, |ui| {
        committed = render_editor(ui, row, buffers);
    });
    committed
}

fn render_editor(
    ui: &mut Ui,
    row: &ParameterRow,
    buffers: &mut HashMap<String, String>,
) -> Option<ParamValue> {
    match &row.value {
        ParamValue::Str(current) => render_text(ui, row, current, buffers, false),
        ParamValue::Text(current) => render_text(ui, row, current, buffers, true),
        ParamValue::Int(current) => {
            let mut value = *current;
            if ui.add(egui::DragValue::new(&mut value).speed(1.0)).changed() && value != *current {
                return Some(ParamValue::Int(value));
            }
            None
        }
        ParamValue::Bool(current) => {
            let mut value = *current;
            if ui.checkbox(&mut value, "").changed() {
                return Some(ParamValue::Bool(value));
            }
            None
        }
        ParamValue::Enum { options, selected } => {
            let mut pick = *selected;
            ComboBox::from_id_salt(&row.key)
                .selected_text(options.get(pick).map(String::as_str).unwrap_or(""))
                .show_ui(ui, |ui| {
                    for (i, option) in options.iter().enumerate() {
                        ui.selectable_value(&mut pick, i, option);
                    }
                });
            if pick != *selected {
                return Some(ParamValue::Enum { options: options.clone(), selected: pick });
            }
            None
        }
    }
}

fn render_text(
    ui: &mut Ui,
    row: &ParameterRow,
    current: &str,
    buffers: &mut HashMap<String, String>,
    multiline: bool,
) -> Option<ParamValue> {
    // The buffer leaves the map every frame and returns only while the
    // editor has focus, so external updates stay visible when idle.
    let mut text = buffers.remove(&row.key).unwrap_or_else(|| current.to_string());

    let response = if multiline {
        ui.add(
            TextEdit::multiline(&mut text)
                .id_salt(row.key.as_str())
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
    } else {
        ui.add(
            TextEdit::singleline(&mut text)
                .id_salt(row.key.as_str())
                .desired_width(f32::INFINITY),
        )
    };

    settle_text_edit(
        buffers,
        &row.key,
        current,
        text,
        multiline,
        response.has_focus(),
        response.lost_focus(),
    )
}

/// Settle one frame of a string editor: commit, keep buffering, or drop.
///
/// The frame that drops focus commits, and only when the text actually
/// changed; frames typed while focused just update the buffer. Idle and
/// unchanged-on-blur frames leave nothing behind, so external updates
/// show through.
fn settle_text_edit(
    buffers: &mut HashMap<String, String>,
    key: &str,
    current: &str,
    text: String,
    multiline: bool,
    has_focus: bool,
    lost_focus: bool,
) -> Option<ParamValue> {
    if lost_focus {
        if text != current {
            return Some(if multiline { ParamValue::Text(text) } else { ParamValue::Str(text) });
        }
    } else if has_focus {
        buffers.insert(key.to_owned(), text);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "node-1$x";

    /// One simulated editor frame, shaped like [`render_text`]: take the
    /// buffer (or the committed value), apply this frame's typing, settle.
    fn editor_frame(
        buffers: &mut HashMap<String, String>,
        current: &str,
        typed: Option<&str>,
        has_focus: bool,
        lost_focus: bool,
    ) -> Option<ParamValue> {
        let mut text = buffers.remove(KEY).unwrap_or_else(|| current.to_string());
        if let Some(t) = typed {
            text = t.to_string();
        }
        settle_text_edit(buffers, KEY, current, text, false, has_focus, lost_focus)
    }

    #[test]
    fn test_keystrokes_buffer_then_blur_commits_once() {
        let mut buffers = HashMap::new();
        let mut commits = Vec::new();

        // three keystrokes while focused, then the focus-loss frame
        for typed in ["4", "42", "420"] {
            commits.extend(editor_frame(&mut buffers, "1", Some(typed), true, false));
        }
        assert!(commits.is_empty());
        assert_eq!(buffers.get(KEY).map(String::as_str), Some("420"));

        commits.extend(editor_frame(&mut buffers, "1", None, false, true));
        assert_eq!(commits, vec![ParamValue::Str("420".into())]);

        // idle frames after the commit produce nothing further
        assert_eq!(editor_frame(&mut buffers, "420", None, false, false), None);
        assert!(buffers.is_empty());
    }

    #[test]
    fn test_blur_without_change_drops_the_buffer() {
        let mut buffers = HashMap::new();

        assert_eq!(editor_frame(&mut buffers, "draft", Some("drafts"), true, false), None);
        assert_eq!(editor_frame(&mut buffers, "draft", Some("draft"), true, false), None);
        // typed back to the stored value: blur is not an edit
        assert_eq!(editor_frame(&mut buffers, "draft", None, false, true), None);
        assert!(buffers.is_empty());
    }

    #[test]
    fn test_commit_variant_matches_editor_shape() {
        let mut buffers = HashMap::new();
        assert_eq!(
            settle_text_edit(&mut buffers, KEY, "a", "b".into(), false, false, true),
            Some(ParamValue::Str("b".into()))
        );
        assert_eq!(
            settle_text_edit(&mut buffers, KEY, "a", "b\nc".into(), true, false, true),
            Some(ParamValue::Text("b\nc".into()))
        );
    }
}
