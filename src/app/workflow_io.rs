//! Workflow document I/O for FlowpadApp.

use std::path::PathBuf;

use log::{error, info};

use super::FlowpadApp;
use crate::entities::{self, Workflow};

impl FlowpadApp {
    /// Load a document from disk and inspect its graph scope.
    pub fn load_workflow(&mut self, path: PathBuf) {
        match entities::load_workflow(&path) {
            Ok(workflow) => {
                info!(
                    "Loaded workflow '{}' from {} ({} nodes)",
                    workflow.title,
                    path.display(),
                    workflow.nodes.len()
                );
                self.workflow = workflow;
                self.close_preview();
                self.select_graph();
                self.status_msg = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                error!("{e:#}");
                self.status_msg = Some(format!("{e:#}"));
            }
        }
    }

    /// Write the current document to disk.
    pub fn save_workflow(&mut self, path: PathBuf) {
        match entities::save_workflow(&path, &self.workflow) {
            Ok(()) => {
                info!("Saved workflow '{}' to {}", self.workflow.title, path.display());
                self.status_msg = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                error!("{e:#}");
                self.status_msg = Some(format!("{e:#}"));
            }
        }
    }

    /// Replace the document with the bundled sample.
    pub fn load_demo(&mut self) {
        self.workflow = Workflow::demo();
        self.close_preview();
        self.select_graph();
        self.status_msg = Some("Demo workflow loaded".to_string());
        info!("Demo workflow loaded");
    }

    // Previews describe resources of the document they were opened from.
    fn close_preview(&mut self) {
        self.show_preview = false;
        self.preview = None;
    }
}
