//! API Handlers
//!
//! HTTP request handlers for each sharing service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::{AnchorKeyCache, MemoryAnchorCache};
use crate::config::Config;
use crate::error::{Result, ShareError};
use crate::models::{validate_anchor_key, HealthResponse, StatsResponse};
use crate::token::{provider_from_config, TokenProvider};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Anchor key cache
    pub anchors: Arc<dyn AnchorKeyCache>,
    /// App token source
    pub tokens: Arc<dyn TokenProvider>,
}

impl AppState {
    /// Creates a new AppState from its two services.
    pub fn new(anchors: Arc<dyn AnchorKeyCache>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { anchors, tokens }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses an in-memory anchor cache with the configured sliding expiration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let anchors = Arc::new(MemoryAnchorCache::new(config.anchor_ttl()));
        let tokens = provider_from_config(&config.token)?;
        Ok(Self::new(anchors, tokens))
    }
}

/// Handler for GET /api/anchors/:anchor_number
///
/// Returns the anchor key as plain text, 404 if unknown or expired.
pub async fn get_anchor_handler(
    State(state): State<AppState>,
    Path(anchor_number): Path<i64>,
) -> Result<String> {
    state.anchors.get_anchor_key(anchor_number).await
}

/// Handler for GET /api/anchors/last
///
/// Returns the most recently stored anchor key, or an empty body if there is none.
pub async fn last_anchor_handler(State(state): State<AppState>) -> String {
    state.anchors.get_last_anchor_key().await.unwrap_or_default()
}

/// Handler for POST /api/anchors
///
/// Reads the raw UTF-8 body as the anchor key and returns the assigned
/// anchor number as plain text.
pub async fn post_anchor_handler(
    State(state): State<AppState>,
    anchor_key: String,
) -> Result<String> {
    if let Some(error_msg) = validate_anchor_key(&anchor_key) {
        return Err(ShareError::InvalidRequest(error_msg));
    }

    let anchor_number = state.anchors.set_anchor_key(anchor_key).await;
    info!(anchor_number, "Anchor key shared");

    Ok(anchor_number.to_string())
}

/// Handler for GET /api/apptoken
///
/// Application specific authorization of the caller belongs in front of this route.
pub async fn app_token_handler(State(state): State<AppState>) -> Result<String> {
    state.tokens.request_token().await
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.anchors.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
