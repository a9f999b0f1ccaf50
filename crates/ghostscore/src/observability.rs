//! Logging and tracing setup.
//!
//! Console output goes to stderr so JSON results on stdout stay parseable.
//! When a log path or directory is configured, a non-blocking JSONL file
//! layer is added alongside it.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (takes precedence over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for the default `ghostscore.log.jsonl` file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, falling back to a config-supplied
    /// log directory.
    ///
    /// `GHOSTSCORE_LOG_PATH` wins over `GHOSTSCORE_LOG_DIR`, which wins over
    /// the config file's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("GHOSTSCORE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("GHOSTSCORE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Resolve the file path logs should be written to, if file logging is
    /// enabled at all.
    fn resolved_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.log_path {
            return Some(path.clone());
        }
        self.log_dir
            .as_ref()
            .map(|dir| dir.join("ghostscore.log.jsonl"))
    }
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` always wins. Otherwise `--quiet` forces `error`, `-v` bumps to
/// `debug`, `-vv` and beyond to `trace`, and the config file's `log_level`
/// is the default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global tracing subscriber.
///
/// Returns the appender's worker guard when file logging is active; the
/// caller must hold it for the life of the process so buffered lines flush.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(path) = config.resolved_path() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}
