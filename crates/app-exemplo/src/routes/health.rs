//! Health/status endpoint.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::AppConfig;
use crate::state::AppState;

/// Body of `GET /health`. Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: String,
    pub env: String,
    pub node_env: Option<String>,
    pub log_level: String,
    pub feature_fake_data: bool,
    pub api_base_url: Option<String>,
    pub timestamp: String,
}

impl HealthResponse {
    /// Snapshot the config at instant `now`.
    pub fn new(config: &AppConfig, now: DateTime<Utc>) -> Self {
        Self {
            status: "ok",
            app: config.app_name.clone(),
            env: config.env_name.clone(),
            node_env: config.node_env.clone(),
            log_level: config.log_level.clone(),
            feature_fake_data: config.feature_fake_data,
            api_base_url: config.api_base_url.clone(),
            timestamp: format_timestamp(now),
        }
    }
}

/// ISO 8601 UTC with millisecond precision, e.g. `2026-10-16T12:34:56.789Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /health — liveness check plus configuration echo.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.config, Utc::now()))
}
