//! API Configuration
//!
//! Where the backend lives and how long to wait for it.

use std::env;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "AGRI_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "AGRI_API_TIMEOUT_SECS";

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, without trailing path
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("agri-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `AGRI_API_BASE_URL`: backend URL (default: `http://localhost:8080`)
    /// - `AGRI_API_TIMEOUT_SECS`: request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => {
                tracing::info!("{BASE_URL_VAR} not set, using default: {}", defaults.base_url);
                defaults.base_url
            }
        };

        let timeout = match lookup(TIMEOUT_VAR) {
            None => defaults.timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid {TIMEOUT_VAR} value, using default");
                    defaults.timeout
                }
            },
        };

        Self {
            base_url,
            timeout,
            ..defaults
        }
    }

    /// Join the base URL and an API path with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
