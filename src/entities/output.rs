//! Output and log records produced by node runs.
//!
//! Outputs and logs share one record shape: a name, an optional resource
//! handle and a file type. A record with `resource_id == None` was declared
//! but never materialized; the panel drops it from display without error.

use serde::{Deserialize, Serialize};

/// File type of a materialized resource.
///
/// Documents written by newer producers may carry type names this build does
/// not know; those survive round-trips through [`FileType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    File,
    Image,
    Csv,
    Json,
    Executable,
    Directory,
    Other(String),
}

impl FileType {
    /// Parse the document-level type name. Unknown names are preserved.
    pub fn from_name(name: &str) -> Self {
        match name {
            "file" => FileType::File,
            "image" => FileType::Image,
            "csv" => FileType::Csv,
            "json" => FileType::Json,
            "executable" => FileType::Executable,
            "directory" => FileType::Directory,
            other => FileType::Other(other.to_string()),
        }
    }

    /// Document-level type name.
    pub fn name(&self) -> &str {
        match self {
            FileType::File => "file",
            FileType::Image => "image",
            FileType::Csv => "csv",
            FileType::Json => "json",
            FileType::Executable => "executable",
            FileType::Directory => "directory",
            FileType::Other(name) => name,
        }
    }
}

/// One output or log entry of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    /// Storage handle of the materialized resource; `None` until produced.
    pub resource_id: Option<String>,
    pub file_type: FileType,
}

impl OutputRecord {
    pub fn new(name: impl Into<String>, resource_id: Option<String>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            resource_id,
            file_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_names_round_trip() {
        for name in ["file", "image", "csv", "json", "executable", "directory"] {
            assert_eq!(FileType::from_name(name).name(), name);
        }
    }

    #[test]
    fn test_unknown_type_name_is_preserved() {
        let ft = FileType::from_name("notebook");
        assert_eq!(ft, FileType::Other("notebook".to_string()));
        assert_eq!(ft.name(), "notebook");
    }
}
