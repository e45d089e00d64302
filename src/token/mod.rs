//! App Token Module
//!
//! Hands out Spatial Anchors access tokens to client devices.
//!
//! # Providers
//! - [`SpatialAnchorsTokenService`]: AAD client-credentials exchange followed
//!   by a Spatial Anchors STS token request
//! - [`StaticTokenProvider`]: fixed token for local development

mod service;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::TokenConfig;
use crate::error::Result;

pub use service::SpatialAnchorsTokenService;

/// Source of access tokens for `GET /api/apptoken`.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn request_token(&self) -> Result<String>;
}

/// Returns the same token on every request.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn request_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Picks the provider for the given settings.
///
/// A configured static token wins over the AAD exchange.
pub fn provider_from_config(config: &TokenConfig) -> Result<Arc<dyn TokenProvider>> {
    match &config.static_token {
        Some(token) => Ok(Arc::new(StaticTokenProvider::new(token.clone()))),
        None => Ok(Arc::new(SpatialAnchorsTokenService::new(config.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShareError;

    #[tokio::test]
    async fn test_static_provider_returns_token() {
        let provider = StaticTokenProvider::new("dev-token");
        assert_eq!(provider.request_token().await.unwrap(), "dev-token");
        assert_eq!(provider.request_token().await.unwrap(), "dev-token");
    }

    #[tokio::test]
    async fn test_provider_from_config_prefers_static_token() {
        let config = TokenConfig {
            static_token: Some("fixed".to_string()),
            ..TokenConfig::default()
        };
        let provider = provider_from_config(&config).unwrap();
        assert_eq!(provider.request_token().await.unwrap(), "fixed");
    }

    #[tokio::test]
    async fn test_provider_from_config_without_credentials() {
        let provider = provider_from_config(&TokenConfig::default()).unwrap();
        let result = provider.request_token().await;
        assert!(matches!(
            result,
            Err(ShareError::TokenServiceNotConfigured(_))
        ));
    }
}
