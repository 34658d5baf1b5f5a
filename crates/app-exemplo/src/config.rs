//! Service configuration, resolved once at startup from the environment.
//!
//! Every value is optional. Text settings with a default treat an empty
//! variable as unset; `NODE_ENV` and `API_BASE_URL` are echoed verbatim and
//! only become `None` when the variable is missing entirely.

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_APP_NAME: &str = "app-exemplo";
pub const DEFAULT_ENV_NAME: &str = "dev";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable configuration snapshot shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address. The service always binds every interface.
    pub host: String,
    /// Listen port (`PORT`).
    pub port: u16,
    /// Display name (`APP_NAME`).
    pub app_name: String,
    /// Resolved environment name (`ENV_NAME`, then `NODE_ENV`).
    pub env_name: String,
    /// Raw `NODE_ENV`, reported separately from `env_name`.
    pub node_env: Option<String>,
    /// Log level (`LOG_LEVEL`); also the default tracing filter.
    pub log_level: String,
    /// `FEATURE_FAKE_DATA == "true"`.
    pub feature_fake_data: bool,
    /// Upstream API base URL (`API_BASE_URL`). Reported only, never called.
    pub api_base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl AppConfig {
    /// Load config from process environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve config from an arbitrary key/value source.
    ///
    /// Fails only when `PORT` is set to something that is not a valid port.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let node_env = lookup("NODE_ENV");
        let env_name = resolve_env_name(lookup("ENV_NAME"), node_env.as_deref());

        let port = match non_empty(lookup("PORT")) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: default_host(),
            port,
            app_name: non_empty(lookup("APP_NAME"))
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            env_name,
            node_env,
            log_level: non_empty(lookup("LOG_LEVEL"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            feature_fake_data: parse_flag(lookup("FEATURE_FAKE_DATA").as_deref()),
            api_base_url: lookup("API_BASE_URL"),
        })
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            env_name: DEFAULT_ENV_NAME.to_string(),
            node_env: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            feature_fake_data: false,
            api_base_url: None,
        }
    }
}

/// Ordered fallback: `ENV_NAME`, then `NODE_ENV`, then `"dev"`.
pub fn resolve_env_name(env_name: Option<String>, node_env: Option<&str>) -> String {
    non_empty(env_name)
        .or_else(|| non_empty(node_env.map(str::to_string)))
        .unwrap_or_else(|| DEFAULT_ENV_NAME.to_string())
}

/// Reads the leading base-10 digits and ignores any trailing text, so
/// `"8080.5"` and `"3000abc"` both bind. No leading digit is an error.
fn parse_port(raw: &str) -> ConfigResult<u16> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end]
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        })
}

/// Only the exact string `"true"` enables a flag.
fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
