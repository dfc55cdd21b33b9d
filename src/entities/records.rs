//! On-disk workflow records and strict conversion into the model.
//!
//! The JSON format keeps parameter values as tagged raw values
//! (`parameter_type` + untyped `value`), so ingestion validates every
//! pair before anything reaches the UI. Unknown fields are ignored,
//! bad values are errors.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::keys;
use super::output::{FileType, OutputRecord};
use super::parameter::{ParamValue, Parameter, Widget};
use super::workflow::{Workflow, WorkflowNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWidget {
    pub alias: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub parameter_type: String,
    pub value: Value,
    #[serde(default)]
    pub widget: Option<RawWidget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOutput {
    pub name: String,
    pub file_type: String,
    #[serde(default)]
    pub resource_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub base_node_name: String,
    #[serde(default)]
    pub parent_node: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub outputs: Vec<RawOutput>,
    #[serde(default)]
    pub logs: Vec<RawOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWorkflow {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

/// Enum values travel as the option list plus the selected index.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEnumValue {
    values: Vec<String>,
    index: usize,
}

fn decode_value(parameter_type: &str, value: Value) -> Result<ParamValue> {
    match parameter_type {
        "str" => match value {
            Value::String(s) => Ok(ParamValue::Str(s)),
            other => bail!("expected string, got {other}"),
        },
        "text" => match value {
            Value::String(s) => Ok(ParamValue::Text(s)),
            other => bail!("expected string, got {other}"),
        },
        "int" => match &value {
            Value::Number(n) => n
                .as_i64()
                .map(ParamValue::Int)
                .ok_or_else(|| anyhow::anyhow!("integer out of range: {n}")),
            // some writers quote integers
            Value::String(s) => s
                .parse::<i64>()
                .map(ParamValue::Int)
                .with_context(|| format!("expected integer, got \"{s}\"")),
            other => bail!("expected integer, got {other}"),
        },
        "bool" => match value {
            Value::Bool(b) => Ok(ParamValue::Bool(b)),
            other => bail!("expected bool, got {other}"),
        },
        "enum" => {
            let raw: RawEnumValue =
                serde_json::from_value(value).context("expected {values, index} object")?;
            if raw.index >= raw.values.len() {
                bail!(
                    "enum index {} out of range for {} option(s)",
                    raw.index,
                    raw.values.len()
                );
            }
            Ok(ParamValue::Enum { options: raw.values, selected: raw.index })
        }
        other => bail!("unknown parameter type '{other}'"),
    }
}

fn encode_value(value: &ParamValue) -> Value {
    match value {
        ParamValue::Str(s) | ParamValue::Text(s) => Value::String(s.clone()),
        ParamValue::Int(i) => Value::from(*i),
        ParamValue::Bool(b) => Value::Bool(*b),
        ParamValue::Enum { options, selected } => serde_json::json!({
            "values": options,
            "index": selected,
        }),
    }
}

impl RawParameter {
    fn into_parameter(self) -> Result<Parameter> {
        if self.name.is_empty() {
            bail!("parameter with empty name");
        }
        // the panel synthesizes this one on node selection; a stored copy
        // would collide with it
        if self.name == keys::P_DESCRIPTION {
            bail!("parameter name '{}' is reserved", keys::P_DESCRIPTION);
        }
        let value = decode_value(&self.parameter_type, self.value)
            .with_context(|| format!("parameter '{}'", self.name))?;
        Ok(Parameter {
            name: self.name,
            value,
            widget: self.widget.map(|w| Widget::new(w.alias)),
        })
    }

    fn from_parameter(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            parameter_type: param.value.type_name().to_string(),
            value: encode_value(&param.value),
            widget: param.widget.as_ref().map(|w| RawWidget { alias: w.alias.clone() }),
        }
    }
}

impl RawOutput {
    fn into_record(self) -> Result<OutputRecord> {
        if self.name.is_empty() {
            bail!("output with empty name");
        }
        Ok(OutputRecord::new(
            self.name,
            self.resource_id,
            FileType::from_name(&self.file_type),
        ))
    }

    fn from_record(rec: &OutputRecord) -> Self {
        Self {
            name: rec.name.clone(),
            file_type: rec.file_type.name().to_string(),
            resource_id: rec.resource_id.clone(),
        }
    }
}

impl RawNode {
    fn into_node(self) -> Result<WorkflowNode> {
        let id: Uuid = self.id.parse().with_context(|| format!("bad node id '{}'", self.id))?;
        let parent_node = match self.parent_node {
            Some(raw) => {
                Some(raw.parse().with_context(|| format!("bad parent node id '{raw}'"))?)
            }
            None => None,
        };

        let mut parameters = Vec::with_capacity(self.parameters.len());
        for raw in self.parameters {
            let param = raw.into_parameter()?;
            if parameters.iter().any(|p: &Parameter| p.name == param.name) {
                bail!("duplicate parameter '{}'", param.name);
            }
            parameters.push(param);
        }

        let outputs =
            self.outputs.into_iter().map(RawOutput::into_record).collect::<Result<Vec<_>>>()?;
        let logs = self.logs.into_iter().map(RawOutput::into_record).collect::<Result<Vec<_>>>()?;

        Ok(WorkflowNode {
            id,
            title: self.title,
            description: self.description,
            base_node_name: self.base_node_name,
            parent_node,
            parameters,
            outputs,
            logs,
        })
    }

    fn from_node(node: &WorkflowNode) -> Self {
        Self {
            id: node.id.to_string(),
            title: node.title.clone(),
            description: node.description.clone(),
            base_node_name: node.base_node_name.clone(),
            parent_node: node.parent_node.map(|id| id.to_string()),
            parameters: node.parameters.iter().map(RawParameter::from_parameter).collect(),
            outputs: node.outputs.iter().map(RawOutput::from_record).collect(),
            logs: node.logs.iter().map(RawOutput::from_record).collect(),
        }
    }
}

impl RawWorkflow {
    pub fn into_workflow(self) -> Result<Workflow> {
        let id: Uuid =
            self.id.parse().with_context(|| format!("bad workflow id '{}'", self.id))?;
        let mut workflow = Workflow {
            id,
            title: self.title,
            description: self.description,
            nodes: indexmap::IndexMap::with_capacity(self.nodes.len()),
        };
        for raw in self.nodes {
            let title = raw.title.clone();
            let node = raw.into_node().with_context(|| format!("node '{title}'"))?;
            if workflow.nodes.insert(node.id, node).is_some() {
                bail!("duplicate node id in '{title}'");
            }
        }
        Ok(workflow)
    }

    pub fn from_workflow(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id.to_string(),
            title: workflow.title.clone(),
            description: workflow.description.clone(),
            nodes: workflow.nodes.values().map(RawNode::from_node).collect(),
        }
    }
}

/// Read and validate a workflow document.
pub fn load_workflow(path: &Path) -> Result<Workflow> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw: RawWorkflow = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    raw.into_workflow().with_context(|| format!("Invalid workflow in {}", path.display()))
}

/// Write a workflow document as pretty JSON.
pub fn save_workflow(path: &Path, workflow: &Workflow) -> Result<()> {
    let raw = RawWorkflow::from_workflow(workflow);
    let json = serde_json::to_string_pretty(&raw).context("Failed to serialize workflow")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
