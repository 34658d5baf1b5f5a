//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{AppConfig, DEFAULT_LOG_LEVEL};

/// Target of the startup line. Always enabled at info, whatever the filter.
pub const STARTUP_TARGET: &str = "app_exemplo::startup";

/// Where the active log filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    RustLog,
    LogLevel,
    Fallback,
}

/// Pick the log filter: `RUST_LOG`, then `LOG_LEVEL`, then `info`.
pub fn select_filter(rust_log: Option<&str>, log_level: &str) -> (EnvFilter, FilterSource) {
    if let Some(filter) = rust_log.and_then(|raw| EnvFilter::try_new(with_startup(raw)).ok()) {
        return (filter, FilterSource::RustLog);
    }
    // LOG_LEVEL is a single level, not a directive list.
    match log_level.parse::<LevelFilter>() {
        Ok(level) => (
            EnvFilter::new(with_startup(&level.to_string())),
            FilterSource::LogLevel,
        ),
        Err(_) => (
            EnvFilter::new(with_startup(DEFAULT_LOG_LEVEL)),
            FilterSource::Fallback,
        ),
    }
}

fn with_startup(directives: &str) -> String {
    format!("{directives},{STARTUP_TARGET}=info")
}

/// Install the global JSON subscriber on stdout.
pub fn init_tracing(config: &AppConfig) {
    let rust_log = std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty());
    let (filter, source) = select_filter(rust_log.as_deref(), &config.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    if source == FilterSource::Fallback {
        tracing::warn!(
            log_level = %config.log_level,
            "unrecognized LOG_LEVEL, logging at info"
        );
    }
}

/// The one line the process prints once the listener is bound.
pub fn log_startup(app_name: &str, port: u16, env_name: &str) {
    tracing::info!(
        target: STARTUP_TARGET,
        app = %app_name,
        port,
        env = %env_name,
        "[{app_name}] iniciado na porta {port} (ENV={env_name})"
    );
}
