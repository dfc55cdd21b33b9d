//! Node and graph parameters.
//!
//! A parameter is a named, typed value plus an optional display widget.
//! `widget == None` means the record exists for other consumers (executors,
//! templates) and is never rendered by the properties panel.

use serde::{Deserialize, Serialize};

/// Typed parameter value. The variant mirrors the document's
/// `parameter_type` field (`str`, `int`, `bool`, `text`, `enum`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Single-line text.
    Str(String),
    Int(i64),
    Bool(bool),
    /// Multi-line text.
    Text(String),
    /// Closed choice: `selected` indexes into `options`.
    Enum { options: Vec<String>, selected: usize },
}

impl ParamValue {
    /// Document-level type name for this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "str",
            ParamValue::Int(_) => "int",
            ParamValue::Bool(_) => "bool",
            ParamValue::Text(_) => "text",
            ParamValue::Enum { .. } => "enum",
        }
    }

    /// Human-readable rendering used by read-only rows and previews.
    pub fn display(&self) -> String {
        match self {
            ParamValue::Str(s) | ParamValue::Text(s) => s.clone(),
            ParamValue::Int(v) => v.to_string(),
            ParamValue::Bool(v) => v.to_string(),
            ParamValue::Enum { options, selected } => options
                .get(*selected)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

/// Display metadata: a parameter is rendered only when a widget is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Label shown next to the value editor.
    pub alias: String,
}

impl Widget {
    pub fn new(alias: impl Into<String>) -> Self {
        Self { alias: alias.into() }
    }
}

/// One named parameter. Names are unique within their owning node or graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
    pub widget: Option<Widget>,
}

impl Parameter {
    /// Displayed parameter with a widget alias.
    pub fn new(name: impl Into<String>, value: ParamValue, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            widget: Some(Widget::new(alias)),
        }
    }

    /// Parameter without a widget: stored and forwarded, never rendered.
    pub fn hidden(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
            widget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_match_document_vocabulary() {
        assert_eq!(ParamValue::Str("a".into()).type_name(), "str");
        assert_eq!(ParamValue::Int(3).type_name(), "int");
        assert_eq!(ParamValue::Bool(true).type_name(), "bool");
        assert_eq!(ParamValue::Text("a\nb".into()).type_name(), "text");
        assert_eq!(
            ParamValue::Enum { options: vec!["x".into()], selected: 0 }.type_name(),
            "enum"
        );
    }

    #[test]
    fn test_display_picks_selected_enum_option() {
        let v = ParamValue::Enum {
            options: vec!["first".into(), "second".into()],
            selected: 1,
        };
        assert_eq!(v.display(), "second");
    }

    #[test]
    fn test_hidden_parameter_has_no_widget() {
        let p = Parameter::hidden("cmd", ParamValue::Str("echo".into()));
        assert!(p.widget.is_none());
        let q = Parameter::new("x", ParamValue::Int(1), "X");
        assert_eq!(q.widget.as_ref().map(|w| w.alias.as_str()), Some("X"));
    }
}
