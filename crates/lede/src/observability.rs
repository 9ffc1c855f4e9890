//! Logging setup.
//!
//! Two layers: human-readable lines on stderr, and JSON lines in a log file.
//! The file lives at `LEDE_LOG_PATH` if set, otherwise in a daily rolling
//! `lede.jsonl` under the first of `LEDE_LOG_DIR`, the configured `log_dir`,
//! or the platform data directory. File logging is skipped when no directory
//! can be created.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "LEDE_LOG_PATH";
const LOG_DIR_ENV: &str = "LEDE_LOG_DIR";
const LOG_FILE_NAME: &str = "lede.jsonl";

/// Where log files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to; disables rotation.
    pub log_path: Option<PathBuf>,
    /// Directory for daily rolling files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log destinations from the environment, then `config_log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                lede_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

/// Keeps the background log writer alive; logs are flushed on drop.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Filter for the log file: `RUST_LOG` if set, otherwise the CLI flags, otherwise
/// the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(level_directive(quiet, verbose).unwrap_or(config_level))
    })
}

/// Filter for stderr: `RUST_LOG` if set, otherwise warnings unless `-q`/`-v`
/// say otherwise.
pub fn stderr_filter(quiet: bool, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(quiet, verbose).unwrap_or("warn")))
}

const fn level_directive(quiet: bool, verbose: u8) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    file_filter: EnvFilter,
    stderr_filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(ObservabilityGuard { _file: guard })
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    if let Some(path) = config.log_path.as_deref() {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = path.file_name()?;
        ensure_dir(dir)?;
        return Some(tracing_appender::rolling::never(dir, name));
    }
    let dir = config.log_dir.as_deref()?;
    ensure_dir(dir)?;
    Some(tracing_appender::rolling::daily(dir, LOG_FILE_NAME))
}

fn ensure_dir(dir: &Path) -> Option<()> {
    std::fs::create_dir_all(dir).ok()
}
