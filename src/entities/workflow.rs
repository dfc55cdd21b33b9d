//! Workflow document model: a titled graph plus its nodes.
//!
//! The document is the single source of truth the UI edits. The properties
//! panel holds private copies of whatever is selected; edits travel back
//! here via [`Workflow::set_parameter`].

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keys;
use super::output::{FileType, OutputRecord};
use super::parameter::{ParamValue, Parameter};

/// One node of the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Node kind; `"file"` nodes get the show-file header treatment.
    pub base_node_name: String,
    /// Template/original this node was instantiated from, if recorded.
    pub parent_node: Option<Uuid>,
    pub parameters: Vec<Parameter>,
    pub outputs: Vec<OutputRecord>,
    pub logs: Vec<OutputRecord>,
}

impl WorkflowNode {
    pub fn new(title: impl Into<String>, base_node_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            base_node_name: base_node_name.into(),
            parent_node: None,
            parameters: Vec::new(),
            outputs: Vec::new(),
            logs: Vec::new(),
        }
    }
}

/// The loaded workflow document. Node order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub nodes: IndexMap<Uuid, WorkflowNode>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Untitled workflow".to_string(),
            description: String::new(),
            nodes: IndexMap::new(),
        }
    }
}

impl Workflow {
    pub fn node(&self, id: &Uuid) -> Option<&WorkflowNode> {
        self.nodes.get(id)
    }

    pub fn add_node(&mut self, node: WorkflowNode) -> Uuid {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Graph-scope parameters shown when no node is selected: the workflow's
    /// own title and description, both editable.
    pub fn graph_parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::new(keys::P_TITLE, ParamValue::Str(self.title.clone()), "Title"),
            Parameter::new(
                keys::P_GRAPH_DESCRIPTION,
                ParamValue::Text(self.description.clone()),
                keys::DESCRIPTION_ALIAS,
            ),
        ]
    }

    /// Apply a forwarded edit.
    ///
    /// `node_id == None` targets the graph scope (title/description).
    /// In node scope the synthetic description name routes to the node's
    /// description field; every other name must match an existing parameter.
    /// Returns false when nothing matched (the edit is dropped, logged).
    pub fn set_parameter(&mut self, node_id: Option<Uuid>, name: &str, value: ParamValue) -> bool {
        match node_id {
            None => match name {
                keys::P_TITLE => {
                    self.title = value.display();
                    true
                }
                keys::P_GRAPH_DESCRIPTION => {
                    self.description = value.display();
                    true
                }
                other => {
                    warn!("Graph scope has no parameter '{other}'");
                    false
                }
            },
            Some(id) => {
                let Some(node) = self.nodes.get_mut(&id) else {
                    warn!("Edit for unknown node {id} dropped");
                    return false;
                };
                if name == keys::P_DESCRIPTION {
                    node.description = value.display();
                    return true;
                }
                match node.parameters.iter_mut().find(|p| p.name == name) {
                    Some(param) => {
                        param.value = value;
                        true
                    }
                    None => {
                        warn!("Node '{}' has no parameter '{name}'", node.title);
                        false
                    }
                }
            }
        }
    }

    /// Sample document used on first launch and by the outline's Demo action.
    pub fn demo() -> Self {
        let mut wf = Workflow {
            id: Uuid::new_v4(),
            title: "Census report".to_string(),
            description: "Fetch a dataset, filter it and render a summary.".to_string(),
            nodes: IndexMap::new(),
        };

        let mut dataset = WorkflowNode::new("population.csv", keys::NODE_FILE);
        dataset.description = "Raw census rows, one per district.".to_string();
        dataset.parameters = vec![Parameter::hidden(
            "path",
            ParamValue::Str("/data/population.csv".into()),
        )];
        dataset.outputs = vec![OutputRecord::new(
            "out",
            Some("res-4f1c92".to_string()),
            FileType::Csv,
        )];
        let dataset_id = wf.add_node(dataset);

        let mut filter = WorkflowNode::new("Filter rows", keys::NODE_OPERATION);
        filter.description = "Keep districts above the population threshold.".to_string();
        filter.parent_node = Some(dataset_id);
        filter.parameters = vec![
            Parameter::new("threshold", ParamValue::Int(50_000), "Threshold"),
            Parameter::new("strict", ParamValue::Bool(true), "Strict compare"),
            Parameter::new(
                "mode",
                ParamValue::Enum {
                    options: vec!["include".into(), "exclude".into()],
                    selected: 0,
                },
                "Mode",
            ),
            Parameter::hidden("cmd", ParamValue::Str("python filter.py".into())),
        ];
        filter.outputs = vec![
            OutputRecord::new("filtered", Some("res-77ab03".to_string()), FileType::Csv),
            OutputRecord::new("rejected", None, FileType::Csv),
        ];
        filter.logs = vec![
            OutputRecord::new(keys::LOG_STDOUT, Some("log-20d511".to_string()), FileType::File),
            OutputRecord::new(keys::LOG_STDERR, None, FileType::File),
            OutputRecord::new(keys::LOG_WORKER, Some("log-9c04e8".to_string()), FileType::File),
        ];
        let filter_id = wf.add_node(filter);

        let mut report = WorkflowNode::new("Render summary", keys::NODE_OPERATION);
        report.description = "Markdown summary of the filtered districts.".to_string();
        report.parent_node = Some(filter_id);
        report.parameters = vec![
            Parameter::new("heading", ParamValue::Str("Census summary".into()), "Heading"),
            Parameter::new(
                "notes",
                ParamValue::Text("Compiled nightly.\nFigures are provisional.".into()),
                "Notes",
            ),
        ];
        report.outputs = vec![OutputRecord::new(
            "report",
            Some("res-b5529d".to_string()),
            FileType::Json,
        )];
        report.logs = vec![OutputRecord::new(
            keys::LOG_STDOUT,
            Some("log-3f76aa".to_string()),
            FileType::File,
        )];
        wf.add_node(report);

        wf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_parameters_expose_title_and_description() {
        let wf = Workflow {
            title: "My flow".to_string(),
            description: "notes".to_string(),
            ..Workflow::default()
        };
        let params = wf.graph_parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, keys::P_TITLE);
        assert_eq!(params[0].value, ParamValue::Str("My flow".into()));
        assert_eq!(params[1].name, keys::P_GRAPH_DESCRIPTION);
        assert_eq!(params[1].value, ParamValue::Text("notes".into()));
        assert!(params.iter().all(|p| p.widget.is_some()));
    }

    #[test]
    fn test_set_parameter_graph_scope() {
        let mut wf = Workflow::default();
        assert!(wf.set_parameter(None, keys::P_TITLE, ParamValue::Str("Renamed".into())));
        assert_eq!(wf.title, "Renamed");
        assert!(wf.set_parameter(
            None,
            keys::P_GRAPH_DESCRIPTION,
            ParamValue::Text("new text".into())
        ));
        assert_eq!(wf.description, "new text");
        assert!(!wf.set_parameter(None, "bogus", ParamValue::Int(1)));
    }

    #[test]
    fn test_set_parameter_node_scope() {
        let mut wf = Workflow::default();
        let mut node = WorkflowNode::new("op", keys::NODE_OPERATION);
        node.parameters = vec![Parameter::new("x", ParamValue::Int(1), "X")];
        let id = wf.add_node(node);

        assert!(wf.set_parameter(Some(id), "x", ParamValue::Int(42)));
        assert_eq!(
            wf.node(&id).unwrap().parameters[0].value,
            ParamValue::Int(42)
        );

        // synthetic description routes to the description field
        assert!(wf.set_parameter(
            Some(id),
            keys::P_DESCRIPTION,
            ParamValue::Text("explained".into())
        ));
        let node = wf.node(&id).unwrap();
        assert_eq!(node.description, "explained");
        assert!(node.parameters.iter().all(|p| p.name != keys::P_DESCRIPTION));

        assert!(!wf.set_parameter(Some(id), "missing", ParamValue::Int(0)));
        assert!(!wf.set_parameter(Some(Uuid::new_v4()), "x", ParamValue::Int(0)));
    }

    #[test]
    fn test_demo_document_is_consistent() {
        let wf = Workflow::demo();
        assert!(!wf.nodes.is_empty());
        assert!(wf
            .nodes
            .values()
            .any(|n| n.base_node_name == keys::NODE_FILE));
        // every recorded parent resolves inside the document
        for node in wf.nodes.values() {
            if let Some(parent) = node.parent_node {
                assert!(wf.nodes.contains_key(&parent), "dangling parent on {}", node.title);
            }
        }
    }
}
