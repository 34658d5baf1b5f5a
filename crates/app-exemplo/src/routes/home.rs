//! Landing page.

use axum::extract::State;
use axum::response::Html;

use crate::config::AppConfig;
use crate::state::AppState;

/// Render the landing page markup.
///
/// Values are interpolated as-is; they come from the operator's environment.
pub fn render_home(config: &AppConfig) -> String {
    format!(
        "<h1>{app}</h1>\n<p>Ambiente: <b>{env}</b></p>\n<p>Tente <code>/health</code></p>",
        app = config.app_name,
        env = config.env_name,
    )
}

/// GET / — human-readable landing page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.config))
}
