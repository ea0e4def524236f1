//! HTTP surface: page routes, static assets and health.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use axum_extra::extract::CookieJar;
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::ui::Theme;
use crate::ui::app::{chat_page, landing_page};

/// Cookie written by the theme toggle.
pub const THEME_COOKIE: &str = "theme";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(landing_handler))
        .route("/chat", get(chat_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), AppError> {
    let addr = config.server.addr();
    let app = router(AppState::new(Arc::clone(&config)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.listening",
        addr = %addr,
        static_dir = %config.server.static_dir,
        default_theme = %config.ui.default_theme,
        "Server listening"
    );

    axum::serve(listener, app).await.map_err(AppError::Serve)
}

/// Theme from the request cookie, else the configured default.
pub fn resolve_theme(jar: &CookieJar, default: Theme) -> Theme {
    let Some(cookie) = jar.get(THEME_COOKIE) else {
        return default;
    };

    cookie.value().parse().unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring theme cookie");
        default
    })
}

async fn landing_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let theme = resolve_theme(&jar, state.config.ui.default_theme);
    Html(landing_page(theme))
}

async fn chat_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let theme = resolve_theme(&jar, state.config.ui.default_theme);
    Html(chat_page(theme))
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

    fn jar(cookie: &'static str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn cookie_overrides_default() {
        assert_eq!(resolve_theme(&jar("theme=light"), Theme::Dark), Theme::Light);
    }

    #[test]
    fn invalid_or_missing_cookie_falls_back() {
        assert_eq!(resolve_theme(&jar("theme=sepia"), Theme::Light), Theme::Light);
        assert_eq!(resolve_theme(&jar("other=1"), Theme::Dark), Theme::Dark);
    }
}
