//! app-exemplo — landing page and health/status HTTP server.

use tokio::net::TcpListener;

use app_exemplo::config::AppConfig;
use app_exemplo::logging;
use app_exemplo::routes;
use app_exemplo::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables already set take precedence.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init_tracing(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "app-exemplo starting");
    tracing::debug!(
        feature_fake_data = config.feature_fake_data,
        api_base_url = ?config.api_base_url,
        "config loaded"
    );

    let addr = config.bind_addr();
    let app_name = config.app_name.clone();
    let env_name = config.env_name.clone();
    let app = routes::build_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    let port = listener.local_addr()?.port();
    logging::log_startup(&app_name, port, &env_name);

    axum::serve(listener, app).await?;

    Ok(())
}
