//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::cache::MAX_ANCHOR_TTL;

/// Default sliding expiration for anchor entries (48 hours).
pub const DEFAULT_ANCHOR_TTL_SECS: u64 = 48 * 60 * 60;

/// Default identity provider authority host.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Default Spatial Anchors security token service endpoint.
pub const DEFAULT_STS_ENDPOINT: &str = "https://sts.mixedreality.azure.com";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Sliding expiration window in seconds for anchor entries
    pub anchor_ttl: u64,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// App token service settings
    pub token: TokenConfig,
}

/// Settings for the app token exchange.
///
/// The account and AAD fields are optional so the anchor endpoints can run
/// without any cloud credentials; `/api/apptoken` then answers 503.
/// `Debug` output redacts the client key and the static token.
#[derive(Clone)]
pub struct TokenConfig {
    /// Spatial Anchors account id
    pub account_id: Option<String>,
    /// AAD application (client) id
    pub aad_client_id: Option<String>,
    /// AAD application key
    pub aad_client_key: Option<String>,
    /// AAD tenant the application is registered in
    pub aad_tenant_id: Option<String>,
    /// Base URL of the AAD authority
    pub authority_host: String,
    /// Base URL of the Spatial Anchors token service, also used as the AAD resource
    pub sts_endpoint: String,
    /// Fixed token handed out instead of performing the exchange
    pub static_token: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ANCHOR_TTL_SECS` - Sliding expiration in seconds (default: 172800);
    ///   zero or anything above ten years falls back to the default
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - token settings, see [`TokenConfig::from_env`]
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(3000),
            anchor_ttl: anchor_ttl_or_default(parse_var("ANCHOR_TTL_SECS")),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(60),
            token: TokenConfig::from_env(),
        }
    }

    /// Sliding expiration window as a `Duration`.
    pub fn anchor_ttl(&self) -> Duration {
        Duration::from_secs(self.anchor_ttl)
    }
}

impl TokenConfig {
    /// Loads token settings from the environment.
    ///
    /// # Environment Variables
    /// - `SPATIAL_ANCHORS_ACCOUNT_ID`
    /// - `AAD_CLIENT_ID`, `AAD_CLIENT_KEY`, `AAD_TENANT_ID`
    /// - `AAD_AUTHORITY_HOST` (default: login.microsoftonline.com)
    /// - `SPATIAL_ANCHORS_STS_ENDPOINT` (default: sts.mixedreality.azure.com)
    /// - `SPATIAL_ANCHORS_STATIC_TOKEN` - development override
    pub fn from_env() -> Self {
        Self {
            account_id: non_empty_var("SPATIAL_ANCHORS_ACCOUNT_ID"),
            aad_client_id: non_empty_var("AAD_CLIENT_ID"),
            aad_client_key: non_empty_var("AAD_CLIENT_KEY"),
            aad_tenant_id: non_empty_var("AAD_TENANT_ID"),
            authority_host: non_empty_var("AAD_AUTHORITY_HOST")
                .unwrap_or_else(|| DEFAULT_AUTHORITY_HOST.to_string()),
            sts_endpoint: non_empty_var("SPATIAL_ANCHORS_STS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_STS_ENDPOINT.to_string()),
            static_token: non_empty_var("SPATIAL_ANCHORS_STATIC_TOKEN"),
        }
    }

    /// Names of the required settings that are not set.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_id.is_none() {
            missing.push("SPATIAL_ANCHORS_ACCOUNT_ID");
        }
        if self.aad_client_id.is_none() {
            missing.push("AAD_CLIENT_ID");
        }
        if self.aad_client_key.is_none() {
            missing.push("AAD_CLIENT_KEY");
        }
        if self.aad_tenant_id.is_none() {
            missing.push("AAD_TENANT_ID");
        }
        missing
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("account_id", &self.account_id)
            .field("aad_client_id", &self.aad_client_id)
            .field("aad_client_key", &redacted(&self.aad_client_key))
            .field("aad_tenant_id", &self.aad_tenant_id)
            .field("authority_host", &self.authority_host)
            .field("sts_endpoint", &self.sts_endpoint)
            .field("static_token", &redacted(&self.static_token))
            .finish()
    }
}

fn redacted(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            anchor_ttl: DEFAULT_ANCHOR_TTL_SECS,
            cleanup_interval: 60,
            token: TokenConfig::default(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            account_id: None,
            aad_client_id: None,
            aad_client_key: None,
            aad_tenant_id: None,
            authority_host: DEFAULT_AUTHORITY_HOST.to_string(),
            sts_endpoint: DEFAULT_STS_ENDPOINT.to_string(),
            static_token: None,
        }
    }
}

/// Keeps a TTL within `1..=MAX_ANCHOR_TTL` seconds, otherwise the 48h default.
fn anchor_ttl_or_default(secs: Option<u64>) -> u64 {
    secs.filter(|ttl| (1..=MAX_ANCHOR_TTL.as_secs()).contains(ttl))
        .unwrap_or(DEFAULT_ANCHOR_TTL_SECS)
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.anchor_ttl, 172_800);
        assert_eq!(config.anchor_ttl(), Duration::from_secs(48 * 3600));
        assert_eq!(config.cleanup_interval, 60);
        assert!(config.token.static_token.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("ANCHOR_TTL_SECS");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("AAD_AUTHORITY_HOST");
        env::remove_var("SPATIAL_ANCHORS_STS_ENDPOINT");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.anchor_ttl, DEFAULT_ANCHOR_TTL_SECS);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.token.authority_host, DEFAULT_AUTHORITY_HOST);
        assert_eq!(config.token.sts_endpoint, DEFAULT_STS_ENDPOINT);
    }

    #[test]
    fn test_out_of_range_ttl_falls_back_to_default() {
        assert_eq!(anchor_ttl_or_default(Some(u64::MAX)), DEFAULT_ANCHOR_TTL_SECS);
        assert_eq!(
            anchor_ttl_or_default(Some(MAX_ANCHOR_TTL.as_secs() + 1)),
            DEFAULT_ANCHOR_TTL_SECS
        );
        assert_eq!(anchor_ttl_or_default(Some(0)), DEFAULT_ANCHOR_TTL_SECS);
        assert_eq!(anchor_ttl_or_default(None), DEFAULT_ANCHOR_TTL_SECS);
        assert_eq!(anchor_ttl_or_default(Some(3600)), 3600);
        assert_eq!(
            anchor_ttl_or_default(Some(MAX_ANCHOR_TTL.as_secs())),
            MAX_ANCHOR_TTL.as_secs()
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let token = TokenConfig {
            aad_client_id: Some("client-id".into()),
            aad_client_key: Some("super-secret-key".into()),
            static_token: Some("dev-token-value".into()),
            ..TokenConfig::default()
        };
        let config = Config {
            token: token.clone(),
            ..Config::default()
        };

        for output in [format!("{:?}", token), format!("{:?}", config)] {
            assert!(!output.contains("super-secret-key"));
            assert!(!output.contains("dev-token-value"));
            assert!(output.contains("<redacted>"));
            assert!(output.contains("client-id"));
        }
    }

    #[test]
    fn test_missing_fields_lists_every_credential() {
        let token = TokenConfig::default();
        assert_eq!(
            token.missing_fields(),
            vec![
                "SPATIAL_ANCHORS_ACCOUNT_ID",
                "AAD_CLIENT_ID",
                "AAD_CLIENT_KEY",
                "AAD_TENANT_ID"
            ]
        );
    }

    #[test]
    fn test_missing_fields_empty_when_complete() {
        let token = TokenConfig {
            account_id: Some("account".into()),
            aad_client_id: Some("client".into()),
            aad_client_key: Some("secret".into()),
            aad_tenant_id: Some("tenant".into()),
            ..TokenConfig::default()
        };
        assert!(token.missing_fields().is_empty());
    }
}
