//! Properties panel state - selection snapshots and row derivation.
//!
//! The panel never borrows the workflow. Selecting something copies the
//! data it needs into [`Selection`]; every later frame derives its rows
//! from that snapshot. Edits leave as events and are echoed back into the
//! snapshot on commit, so the visible rows never go stale and never bleed
//! between selections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::keys;
use crate::entities::{FileType, OutputRecord, ParamValue, Parameter, WorkflowNode};

/// How the panel treats its content for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Parameters accept edits. Outputs and logs stay hidden while true.
    pub editable: bool,
    /// Offer preview on rows with a materialized resource.
    pub preview_enabled: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { editable: true, preview_enabled: true }
    }
}

/// What the panel is currently inspecting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Graph(GraphSelection),
    Node(NodeSelection),
}

/// Snapshot of graph-scope data.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSelection {
    pub graph_id: Uuid,
    pub title: String,
    pub parameters: Vec<Parameter>,
}

/// Snapshot of one node. `parameters` already carries the synthetic
/// description entry in front; the source node is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSelection {
    pub graph_id: Uuid,
    pub node_id: Uuid,
    pub title: String,
    pub base_node_name: String,
    pub parent_node: Option<Uuid>,
    pub parameters: Vec<Parameter>,
    pub outputs: Vec<OutputRecord>,
    pub logs: Vec<OutputRecord>,
}

/// Header line derived from the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelHeader {
    /// Graph scope: plain caption.
    Graph { title: String },
    /// File node: the title acts as a preview link for the node's own file.
    ShowFile { title: String, node_id: Uuid },
    /// Node instantiated from another: the title links back to it.
    OpenParent { title: String, parent_id: Uuid },
    /// Node with nothing to navigate to: plain caption.
    Static { title: String },
}

/// One renderable parameter row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRow {
    /// Widget identity: selection scope id + parameter name.
    pub key: String,
    pub name: String,
    pub alias: String,
    pub value: ParamValue,
    pub read_only: bool,
}

/// One renderable output or log row. Only materialized records become
/// rows, so the resource handle is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub key: String,
    pub name: String,
    pub resource_id: String,
    pub file_type: FileType,
    pub node_id: Uuid,
}

/// Stable per-selection widget key for a named row.
pub(crate) fn row_key(scope: Uuid, name: &str) -> String {
    format!("{scope}${name}")
}

fn derive_parameter_rows(scope: Uuid, parameters: &[Parameter], editable: bool) -> Vec<ParameterRow> {
    parameters
        .iter()
        .filter_map(|p| {
            let widget = p.widget.as_ref()?;
            Some(ParameterRow {
                key: row_key(scope, &p.name),
                name: p.name.clone(),
                alias: widget.alias.clone(),
                value: p.value.clone(),
                read_only: !editable,
            })
        })
        .collect()
}

fn derive_output_rows(
    node_id: Uuid,
    records: &[OutputRecord],
    force_type: Option<FileType>,
) -> Vec<OutputRow> {
    records
        .iter()
        .filter_map(|rec| {
            let resource_id = rec.resource_id.clone()?;
            Some(OutputRow {
                key: row_key(node_id, &rec.name),
                name: rec.name.clone(),
                resource_id,
                file_type: force_type.clone().unwrap_or_else(|| rec.file_type.clone()),
                node_id,
            })
        })
        .collect()
}

/// Prepend the synthetic description parameter. The caller's slice stays
/// untouched; the entry exists only in the returned copy.
fn with_description_first(description: &str, parameters: &[Parameter]) -> Vec<Parameter> {
    let mut out = Vec::with_capacity(parameters.len() + 1);
    out.push(Parameter::new(
        keys::P_DESCRIPTION,
        ParamValue::Text(description.to_string()),
        keys::DESCRIPTION_ALIAS,
    ));
    out.extend(parameters.iter().cloned());
    out
}

/// Right-side properties panel.
///
/// Only the column width persists across sessions; selection, config and
/// edit buffers are per-run state.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PropertiesPanel {
    pub name_column_width: f32,
    #[serde(skip)]
    pub config: PanelConfig,
    #[serde(skip)]
    pub selection: Selection,
    /// Text being typed in string editors, keyed by row key. Exists only
    /// while the editor has focus and is dropped on any selection change.
    #[serde(skip)]
    pub(crate) edit_buffers: HashMap<String, String>,
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self {
            name_column_width: 180.0,
            config: PanelConfig::default(),
            selection: Selection::Empty,
            edit_buffers: HashMap::new(),
        }
    }
}

impl PropertiesPanel {
    /// Inspect graph-scope data. Replaces the whole selection in one step.
    pub fn set_graph_data(
        &mut self,
        graph_id: Uuid,
        title: impl Into<String>,
        parameters: Vec<Parameter>,
    ) {
        self.selection = Selection::Graph(GraphSelection {
            graph_id,
            title: title.into(),
            parameters,
        });
        self.edit_buffers.clear();
    }

    /// Inspect one node. Copies what the panel needs and prepends the
    /// synthetic description parameter to the copy.
    pub fn set_node_data(&mut self, graph_id: Uuid, node: &WorkflowNode) {
        self.selection = Selection::Node(NodeSelection {
            graph_id,
            node_id: node.id,
            title: node.title.clone(),
            base_node_name: node.base_node_name.clone(),
            parent_node: node.parent_node,
            parameters: with_description_first(&node.description, &node.parameters),
            outputs: node.outputs.clone(),
            logs: node.logs.clone(),
        });
        self.edit_buffers.clear();
    }

    /// Drop the selection and everything derived from it.
    pub fn clear(&mut self) {
        self.selection = Selection::Empty;
        self.edit_buffers.clear();
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.selection, Selection::Empty)
    }

    /// Node currently inspected, if any. Used for outline highlighting
    /// and as the scope of forwarded edits.
    pub fn selected_node(&self) -> Option<Uuid> {
        match &self.selection {
            Selection::Node(n) => Some(n.node_id),
            _ => None,
        }
    }

    pub fn graph_selected(&self) -> bool {
        matches!(self.selection, Selection::Graph(_))
    }

    /// Scope field of a forwarded edit: `None` means graph scope.
    pub fn edit_scope(&self) -> Option<Uuid> {
        self.selected_node()
    }

    /// Header for the current selection, `None` when empty.
    pub fn header(&self) -> Option<PanelHeader> {
        match &self.selection {
            Selection::Empty => None,
            Selection::Graph(g) => Some(PanelHeader::Graph { title: g.title.clone() }),
            Selection::Node(n) => {
                // file nodes preview themselves; navigation is suppressed
                // even when a parent is recorded
                if n.base_node_name == keys::NODE_FILE {
                    Some(PanelHeader::ShowFile { title: n.title.clone(), node_id: n.node_id })
                } else if let Some(parent_id) = n.parent_node {
                    Some(PanelHeader::OpenParent { title: n.title.clone(), parent_id })
                } else {
                    Some(PanelHeader::Static { title: n.title.clone() })
                }
            }
        }
    }

    /// Parameter rows in stored order. Widget-less parameters never
    /// become rows.
    pub fn parameter_rows(&self) -> Vec<ParameterRow> {
        match &self.selection {
            Selection::Empty => Vec::new(),
            Selection::Graph(g) => {
                derive_parameter_rows(g.graph_id, &g.parameters, self.config.editable)
            }
            Selection::Node(n) => {
                derive_parameter_rows(n.node_id, &n.parameters, self.config.editable)
            }
        }
    }

    /// Materialized outputs of the inspected node.
    pub fn output_rows(&self) -> Vec<OutputRow> {
        match &self.selection {
            Selection::Node(n) => derive_output_rows(n.node_id, &n.outputs, None),
            _ => Vec::new(),
        }
    }

    /// Materialized logs of the inspected node. Logs open in the plain
    /// file viewer regardless of their recorded type.
    pub fn log_rows(&self) -> Vec<OutputRow> {
        match &self.selection {
            Selection::Node(n) => derive_output_rows(n.node_id, &n.logs, Some(FileType::File)),
            _ => Vec::new(),
        }
    }

    /// Outputs section is a run-result view: shown only in read-only mode
    /// and only when something materialized.
    pub fn shows_outputs(&self) -> bool {
        !self.config.editable && !self.output_rows().is_empty()
    }

    pub fn shows_logs(&self) -> bool {
        !self.config.editable && !self.log_rows().is_empty()
    }

    /// Echo a committed edit into the selection snapshot so the rows show
    /// the new value on the next frame. Editing the graph title also
    /// refreshes the header caption.
    pub fn apply_local_edit(&mut self, name: &str, value: &ParamValue) {
        match &mut self.selection {
            Selection::Empty => {}
            Selection::Graph(g) => {
                if name == keys::P_TITLE {
                    g.title = value.display();
                }
                if let Some(p) = g.parameters.iter_mut().find(|p| p.name == name) {
                    p.value = value.clone();
                }
            }
            Selection::Node(n) => {
                if let Some(p) = n.parameters.iter_mut().find(|p| p.name == name) {
                    p.value = value.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Workflow;

    fn node_with(parameters: Vec<Parameter>) -> WorkflowNode {
        let mut node = WorkflowNode::new("Filter rows", keys::NODE_OPERATION);
        node.description = "keeps big districts".to_string();
        node.parameters = parameters;
        node
    }

    fn editable_panel() -> PropertiesPanel {
        PropertiesPanel::default()
    }

    fn read_only_panel() -> PropertiesPanel {
        let mut panel = PropertiesPanel::default();
        panel.config.editable = false;
        panel
    }

    #[test]
    fn test_selection_swap_replaces_all_derived_state() {
        let mut panel = editable_panel();
        let graph_id = Uuid::new_v4();

        let a = node_with(vec![Parameter::new("alpha", ParamValue::Int(1), "Alpha")]);
        panel.set_node_data(graph_id, &a);
        panel.edit_buffers.insert(row_key(a.id, "alpha"), "half-typed".into());

        let b = node_with(vec![Parameter::new("beta", ParamValue::Int(2), "Beta")]);
        panel.set_node_data(graph_id, &b);

        let rows = panel.parameter_rows();
        assert!(rows.iter().any(|r| r.name == "beta"));
        assert!(rows.iter().all(|r| r.name != "alpha"));
        assert_eq!(panel.selected_node(), Some(b.id));
        // nothing typed into the old node survives
        assert!(panel.edit_buffers.is_empty());
    }

    #[test]
    fn test_description_prepended_without_touching_source() {
        let mut panel = editable_panel();
        let node = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        panel.set_node_data(Uuid::new_v4(), &node);

        let rows = panel.parameter_rows();
        assert_eq!(rows[0].name, keys::P_DESCRIPTION);
        assert_eq!(rows[0].alias, keys::DESCRIPTION_ALIAS);
        assert_eq!(rows[0].value, ParamValue::Text("keeps big districts".into()));
        assert_eq!(rows[1].name, "x");

        // the source node never gains the synthetic entry
        assert_eq!(node.parameters.len(), 1);
        assert!(node.parameters.iter().all(|p| p.name != keys::P_DESCRIPTION));
    }

    #[test]
    fn test_widgetless_parameters_are_not_rows_order_kept() {
        let mut panel = editable_panel();
        let node = node_with(vec![
            Parameter::new("first", ParamValue::Int(1), "First"),
            Parameter::hidden("cmd", ParamValue::Str("run.sh".into())),
            Parameter::new("second", ParamValue::Bool(true), "Second"),
        ]);
        panel.set_node_data(Uuid::new_v4(), &node);

        let rows = panel.parameter_rows();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec![keys::P_DESCRIPTION, "first", "second"]);
    }

    #[test]
    fn test_only_materialized_outputs_become_rows() {
        let mut panel = read_only_panel();
        let mut node = node_with(vec![]);
        node.outputs = vec![
            OutputRecord::new("ready", Some("res-1".into()), FileType::Csv),
            OutputRecord::new("pending", None, FileType::Csv),
        ];
        panel.set_node_data(Uuid::new_v4(), &node);

        let rows = panel.output_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "ready");
        assert_eq!(rows[0].resource_id, "res-1");
        assert_eq!(rows[0].file_type, FileType::Csv);
    }

    #[test]
    fn test_log_rows_always_open_as_plain_files() {
        let mut panel = read_only_panel();
        let mut node = node_with(vec![]);
        node.logs = vec![
            OutputRecord::new(keys::LOG_STDOUT, Some("log-1".into()), FileType::Image),
            OutputRecord::new(keys::LOG_STDERR, None, FileType::File),
        ];
        panel.set_node_data(Uuid::new_v4(), &node);

        let rows = panel.log_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_type, FileType::File);
    }

    #[test]
    fn test_header_policy() {
        let mut panel = editable_panel();
        let graph_id = Uuid::new_v4();

        assert_eq!(panel.header(), None);

        panel.set_graph_data(graph_id, "Census report", vec![]);
        assert_eq!(panel.header(), Some(PanelHeader::Graph { title: "Census report".into() }));

        // file node: preview link wins even over a recorded parent
        let mut file_node = WorkflowNode::new("population.csv", keys::NODE_FILE);
        file_node.parent_node = Some(Uuid::new_v4());
        panel.set_node_data(graph_id, &file_node);
        assert_eq!(
            panel.header(),
            Some(PanelHeader::ShowFile { title: "population.csv".into(), node_id: file_node.id })
        );

        let mut child = node_with(vec![]);
        let parent_id = Uuid::new_v4();
        child.parent_node = Some(parent_id);
        panel.set_node_data(graph_id, &child);
        assert_eq!(
            panel.header(),
            Some(PanelHeader::OpenParent { title: "Filter rows".into(), parent_id })
        );

        let orphan = node_with(vec![]);
        panel.set_node_data(graph_id, &orphan);
        assert_eq!(panel.header(), Some(PanelHeader::Static { title: "Filter rows".into() }));
    }

    #[test]
    fn test_editable_gates_rows_and_sections() {
        let mut node = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        node.outputs = vec![OutputRecord::new("out", Some("res-1".into()), FileType::File)];
        node.logs = vec![OutputRecord::new(keys::LOG_STDOUT, Some("log-1".into()), FileType::File)];

        let mut panel = editable_panel();
        panel.set_node_data(Uuid::new_v4(), &node);
        assert!(panel.parameter_rows().iter().all(|r| !r.read_only));
        assert!(!panel.shows_outputs());
        assert!(!panel.shows_logs());

        let mut panel = read_only_panel();
        panel.set_node_data(Uuid::new_v4(), &node);
        assert!(panel.parameter_rows().iter().all(|r| r.read_only));
        assert!(panel.shows_outputs());
        assert!(panel.shows_logs());
    }

    #[test]
    fn test_read_only_without_materialized_rows_hides_sections() {
        let mut panel = read_only_panel();
        let mut node = node_with(vec![]);
        node.outputs = vec![OutputRecord::new("pending", None, FileType::File)];
        panel.set_node_data(Uuid::new_v4(), &node);

        assert!(!panel.shows_outputs());
        assert!(!panel.shows_logs());
    }

    #[test]
    fn test_node_to_graph_drops_node_scoped_data() {
        let mut panel = read_only_panel();
        let graph_id = Uuid::new_v4();

        let mut node = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        node.outputs = vec![OutputRecord::new("out", Some("res-1".into()), FileType::Csv)];
        node.logs = vec![OutputRecord::new(keys::LOG_STDOUT, Some("log-1".into()), FileType::File)];
        panel.set_node_data(graph_id, &node);
        assert!(panel.shows_outputs());

        panel.set_graph_data(graph_id, "Census report", vec![]);

        assert_eq!(panel.selected_node(), None);
        assert!(panel.output_rows().is_empty());
        assert!(panel.log_rows().is_empty());
        assert!(!panel.shows_outputs());
        assert!(!panel.shows_logs());
    }

    #[test]
    fn test_file_node_inspection_scenario() {
        // one file node with a widgeted parameter, one materialized and one
        // pending output, a recorded parent and no logs
        let mut panel = read_only_panel();
        let mut node = WorkflowNode::new("Node1", keys::NODE_FILE);
        node.description = "desc".to_string();
        node.parent_node = Some(Uuid::new_v4());
        node.parameters = vec![Parameter::new("x", ParamValue::Str("1".into()), "X")];
        node.outputs = vec![
            OutputRecord::new("out1", Some("r1".into()), FileType::File),
            OutputRecord::new("out2", None, FileType::File),
        ];
        panel.set_node_data(Uuid::new_v4(), &node);

        let rows = panel.parameter_rows();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec![keys::P_DESCRIPTION, "x"]);

        let outputs = panel.output_rows();
        let output_names: Vec<&str> = outputs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(output_names, vec!["out1"]);

        // file header previews the node itself; the parent link never shows
        assert_eq!(
            panel.header(),
            Some(PanelHeader::ShowFile { title: "Node1".into(), node_id: node.id })
        );
    }

    #[test]
    fn test_clear_returns_to_empty() {
        let mut panel = editable_panel();
        let node = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        panel.set_node_data(Uuid::new_v4(), &node);
        panel.edit_buffers.insert("k".into(), "v".into());

        panel.clear();

        assert!(panel.is_empty());
        assert_eq!(panel.header(), None);
        assert!(panel.parameter_rows().is_empty());
        assert!(panel.output_rows().is_empty());
        assert!(panel.log_rows().is_empty());
        assert!(panel.edit_buffers.is_empty());
    }

    #[test]
    fn test_local_edit_echo() {
        let mut panel = editable_panel();
        let node = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        panel.set_node_data(Uuid::new_v4(), &node);

        panel.apply_local_edit("x", &ParamValue::Int(9));
        let rows = panel.parameter_rows();
        assert_eq!(rows.iter().find(|r| r.name == "x").unwrap().value, ParamValue::Int(9));

        // graph scope: title edit also refreshes the header caption
        let wf = Workflow::default();
        panel.set_graph_data(wf.id, wf.title.clone(), wf.graph_parameters());
        panel.apply_local_edit(keys::P_TITLE, &ParamValue::Str("Renamed".into()));
        assert_eq!(panel.header(), Some(PanelHeader::Graph { title: "Renamed".into() }));
    }

    #[test]
    fn test_row_keys_are_scoped_per_selection() {
        let mut panel = editable_panel();
        let graph_id = Uuid::new_v4();

        let a = node_with(vec![Parameter::new("x", ParamValue::Int(1), "X")]);
        panel.set_node_data(graph_id, &a);
        let key_a = panel.parameter_rows().last().unwrap().key.clone();

        let b = node_with(vec![Parameter::new("x", ParamValue::Int(2), "X")]);
        panel.set_node_data(graph_id, &b);
        let key_b = panel.parameter_rows().last().unwrap().key.clone();

        assert_ne!(key_a, key_b);
    }
}
