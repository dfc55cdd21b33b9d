use flowpad::app::FlowpadApp;
use flowpad::cli::Args;
use flowpad::widgets::properties::PanelConfig;

use clap::Parser;
use eframe::egui;
use log::{debug, info};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("flowpad.log"));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .init();
    }

    info!("Flowpad workflow editor starting...");
    debug!("Command-line args: {:?}", args);

    if let Some(ref path) = args.workflow {
        info!("Input workflow: {}", path.display());
    } else {
        info!("No workflow provided, starting with the demo document (drag-and-drop supported)");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Flowpad v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1280.0, 800.0])
            .with_resizable(true)
            .with_drag_and_drop(true),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Flowpad",
        native_options,
        Box::new(move |cc| {
            // Load persisted layout state if available, otherwise create default
            let mut app: FlowpadApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    FlowpadApp::default()
                });

            // Edit mode comes from the CLI on every launch, never from storage
            app.panel.config = PanelConfig {
                editable: !args.read_only,
                preview_enabled: !args.no_preview,
            };

            match args.workflow {
                Some(path) => app.load_workflow(path),
                None => app.select_graph(),
            }

            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
