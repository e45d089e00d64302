//! API Routes
//!
//! Configures the Axum router with all sharing service endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::cache::MAX_ANCHOR_KEY_SIZE;

use super::handlers::{
    app_token_handler, get_anchor_handler, health_handler, last_anchor_handler,
    post_anchor_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// `/api/anchors/last` is a static segment and takes precedence over the
/// `:anchor_number` capture.
///
/// Upload bodies above [`MAX_ANCHOR_KEY_SIZE`] are refused with 413 before
/// the handler runs.
///
/// # Middleware
/// - CORS: Allows any origin, devices call in from native apps and web views
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/anchors",
            post(post_anchor_handler).layer(DefaultBodyLimit::max(MAX_ANCHOR_KEY_SIZE)),
        )
        .route("/api/anchors/last", get(last_anchor_handler))
        .route("/api/anchors/:anchor_number", get(get_anchor_handler))
        .route("/api/apptoken", get(app_token_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
