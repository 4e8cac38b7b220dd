use std::path::Path;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{any, get, post},
};
use portfolio_notification::Relay;
use tower_http::services::{ServeDir, ServeFile};

pub mod contact;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/api/{*path}", any(api_not_found))
        .with_state(app_state)
}

/// Unknown API paths answer in JSON and never reach the client bundle
async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found." })),
    )
}

/// Serves the built client bundle for every path the API does not handle,
/// falling back to `index.html` so client-side routes resolve.
pub fn with_static(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))))
}
