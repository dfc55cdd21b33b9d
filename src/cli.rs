use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Workflow properties editor
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Path to the workflow file to load (JSON) - optional, can also drag-and-drop
    #[arg(value_name = "WORKFLOW")]
    pub workflow: Option<PathBuf>,

    /// Open the document read-only (parameters locked, outputs and logs shown)
    #[arg(short = 'r', long = "read-only")]
    pub read_only: bool,

    /// Disable the resource preview dialog
    #[arg(long = "no-preview")]
    pub no_preview: bool,

    /// Enable debug logging to file (default: flowpad.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
