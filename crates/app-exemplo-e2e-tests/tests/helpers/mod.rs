//! Shared harness for E2E tests.
//!
//! Serves the real router on an ephemeral loopback port so requests go
//! through hyper and the TCP stack, not just `tower::oneshot`.

use std::collections::HashMap;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use app_exemplo::config::AppConfig;
use app_exemplo::routes::build_router;
use app_exemplo::state::AppState;

/// A running server bound to `127.0.0.1:<ephemeral>`.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose config is resolved from `vars` as if they were
    /// the process environment.
    pub async fn with_env(vars: &[(&str, &str)]) -> Self {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        Self::start(config).await
    }

    /// Start a server with every variable unset.
    pub async fn with_defaults() -> Self {
        Self::with_env(&[]).await
    }

    async fn start(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(AppState::new(config));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .unwrap()
    }

    /// GET /health and decode the body.
    #[allow(dead_code)]
    pub async fn health(&self) -> serde_json::Value {
        let response = self.get("/health").await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
