//! Spatial Anchors token exchange.
//!
//! 1. `POST {authority}/{tenant}/oauth2/token` with the AAD client
//!    credentials, asking for a token whose resource is the STS endpoint.
//! 2. `GET {sts}/Accounts/{account_id}/token` with that AAD token as bearer,
//!    returning the Spatial Anchors access token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::TokenConfig;
use crate::error::{Result, ShareError};
use crate::token::TokenProvider;

const USER_AGENT_VALUE: &str = concat!("anchor-share/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// AAD token endpoint response (only the field we use).
#[derive(Debug, Deserialize)]
struct AadTokenResponse {
    access_token: String,
}

/// Spatial Anchors STS response.
#[derive(Debug, Deserialize)]
struct StsTokenResponse {
    #[serde(rename = "AccessToken")]
    access_token: String,
}

/// Borrowed view of a complete set of credentials.
struct Credentials<'a> {
    account_id: &'a str,
    client_id: &'a str,
    client_key: &'a str,
    tenant_id: &'a str,
}

/// Token provider backed by AAD and the Spatial Anchors STS.
#[derive(Debug, Clone)]
pub struct SpatialAnchorsTokenService {
    client: reqwest::Client,
    config: TokenConfig,
}

impl SpatialAnchorsTokenService {
    pub fn new(config: TokenConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ShareError::TokenService(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn credentials(&self) -> Result<Credentials<'_>> {
        match (
            self.config.account_id.as_deref(),
            self.config.aad_client_id.as_deref(),
            self.config.aad_client_key.as_deref(),
            self.config.aad_tenant_id.as_deref(),
        ) {
            (Some(account_id), Some(client_id), Some(client_key), Some(tenant_id)) => {
                Ok(Credentials {
                    account_id,
                    client_id,
                    client_key,
                    tenant_id,
                })
            }
            _ => Err(ShareError::TokenServiceNotConfigured(format!(
                "missing {}",
                self.config.missing_fields().join(", ")
            ))),
        }
    }

    fn sts_base(&self) -> &str {
        self.config.sts_endpoint.trim_end_matches('/')
    }

    async fn request_aad_token(&self, credentials: &Credentials<'_>) -> Result<String> {
        let url = format!(
            "{}/{}/oauth2/token",
            self.config.authority_host.trim_end_matches('/'),
            credentials.tenant_id
        );
        debug!(url = %url, "requesting AAD app token");

        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id),
                ("client_secret", credentials.client_key),
                ("resource", self.sts_base()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShareError::TokenService(format!(
                "identity provider returned {}",
                status
            )));
        }

        let body: AadTokenResponse = response.json().await?;
        Ok(body.access_token)
    }

    async fn request_sts_token(&self, account_id: &str, aad_token: &str) -> Result<String> {
        let url = format!("{}/Accounts/{}/token", self.sts_base(), account_id);
        debug!(url = %url, "requesting Spatial Anchors token");

        let response = self.client.get(&url).bearer_auth(aad_token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShareError::TokenService(format!(
                "token service returned {}",
                status
            )));
        }

        let body: StsTokenResponse = response.json().await?;
        Ok(body.access_token)
    }

    async fn exchange(&self, credentials: &Credentials<'_>) -> Result<String> {
        let aad_token = self.request_aad_token(credentials).await?;
        self.request_sts_token(credentials.account_id, &aad_token)
            .await
    }
}

#[async_trait]
impl TokenProvider for SpatialAnchorsTokenService {
    async fn request_token(&self) -> Result<String> {
        let credentials = self.credentials()?;

        let result = self.exchange(&credentials).await;
        if let Err(e) = &result {
            warn!(error = %e, "app token request failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reports_missing_fields() {
        let service = SpatialAnchorsTokenService::new(TokenConfig {
            account_id: Some("account".into()),
            aad_client_id: Some("client".into()),
            ..TokenConfig::default()
        })
        .unwrap();

        match service.credentials() {
            Err(ShareError::TokenServiceNotConfigured(msg)) => {
                assert_eq!(msg, "missing AAD_CLIENT_KEY, AAD_TENANT_ID");
            }
            other => panic!("expected TokenServiceNotConfigured, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_debug_does_not_leak_client_key() {
        let service = SpatialAnchorsTokenService::new(TokenConfig {
            aad_client_key: Some("client-secret-value".into()),
            ..TokenConfig::default()
        })
        .unwrap();

        let output = format!("{:?}", service);
        assert!(!output.contains("client-secret-value"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn test_sts_base_strips_trailing_slash() {
        let service = SpatialAnchorsTokenService::new(TokenConfig {
            sts_endpoint: "https://sts.example.test/".into(),
            ..TokenConfig::default()
        })
        .unwrap();
        assert_eq!(service.sts_base(), "https://sts.example.test");
    }

    #[test]
    fn test_sts_response_field_name() {
        let body: StsTokenResponse =
            serde_json::from_str(r#"{"AccessToken":"sts-token","expiresIn":86400}"#).unwrap();
        assert_eq!(body.access_token, "sts-token");
    }
}
