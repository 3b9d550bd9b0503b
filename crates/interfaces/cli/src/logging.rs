use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use giftwise_config::TelemetryConfig;

const LOG_FILE_PREFIX: &str = "giftwise.log";

fn prepare_log_dir(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir).to_path_buf();
    fs::create_dir_all(&path)
        .with_context(|| format!("failed to create log directory {}", path.display()))?;
    Ok(path)
}

/// `RUST_LOG` wins over the configured level.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Installs a file-backed subscriber.  The returned guard flushes pending
/// lines on drop and must live until the program exits.
pub fn init(telemetry: &TelemetryConfig) -> Result<WorkerGuard> {
    let dir = prepare_log_dir(&telemetry.log_dir)?;
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&telemetry.log_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(guard)
}
