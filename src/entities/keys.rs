//! Well-known names in workflow documents.
//!
//! Avoid string typos, enable IDE autocomplete.
//! Usage: `if node.base_node_name == NODE_FILE { ... }`

// === Synthetic parameters ===
/// Synthetic parameter carrying the node description. Prepended by the
/// properties panel on node selection; never present in stored documents.
pub const P_DESCRIPTION: &str = "_DESCRIPTION";
/// Display alias for the synthetic description parameter.
pub const DESCRIPTION_ALIAS: &str = "Description";

// === Graph-level parameter names ===
/// Workflow title, surfaced as an editable parameter in graph scope.
pub const P_TITLE: &str = "title";
/// Workflow description, surfaced as an editable parameter in graph scope.
pub const P_GRAPH_DESCRIPTION: &str = "description";

// === Node kinds ===
/// Base node kind whose header opens the file preview instead of navigating.
pub const NODE_FILE: &str = "file";
/// Base node kind for regular operations.
pub const NODE_OPERATION: &str = "operation";

// === Log names ===
/// Captured standard output of an executed node.
pub const LOG_STDOUT: &str = "stdout";
/// Captured standard error of an executed node.
pub const LOG_STDERR: &str = "stderr";
/// Executor-side log of the run itself.
pub const LOG_WORKER: &str = "worker";
