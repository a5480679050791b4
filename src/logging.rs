//! Logging Setup
//!
//! Installs the process-wide tracing subscriber from an explicit
//! `RunConfig`: a console layer always, plus a timestamped per-run log
//! file outside dry-run. The file handle is opened here and owned by the
//! subscriber for the life of the process; nothing else mutates logger
//! state.

use crate::config::RunConfig;
use crate::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// What the setup produced; carried around so the CLI can echo the log
/// file location.
#[derive(Debug)]
pub struct LogHandle {
    pub log_file: Option<PathBuf>,
}

/// Initialize logging once per process. Under dry-run only the console
/// layer is installed; otherwise a `draftd_<timestamp>.log` file is
/// created under `logs_dir`.
pub fn init(config: &RunConfig, logs_dir: &Path) -> Result<LogHandle> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));

    let console_layer = fmt::layer().with_target(true);

    if config.dry_run {
        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .init();
        return Ok(LogHandle { log_file: None });
    }

    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create log directory: {}", logs_dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_file = logs_dir.join(format!("draftd_{}.log", timestamp));
    let file = File::create(&log_file)
        .with_context(|| format!("failed to create log file: {}", log_file.display()))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogHandle {
        log_file: Some(log_file),
    })
}
