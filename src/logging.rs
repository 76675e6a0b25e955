//! Logging configuration using tracing
//!
//! The UI owns stdout, so logs go to a daily-rolling file under the
//! platform data directory. Log level is controlled by the
//! `CODE_EXPORT_TUI_LOG` environment variable.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "code-export-tui.log");

    // Default to info, allow override via CODE_EXPORT_TUI_LOG
    let env_filter = EnvFilter::try_from_env("CODE_EXPORT_TUI_LOG")
        .unwrap_or_else(|_| EnvFilter::new("code_export_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_dir = %log_dir.display(), "code-export-tui starting");

    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("code-export-tui").join("logs")
}
