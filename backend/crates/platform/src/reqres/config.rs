//! Gateway Configuration

use std::time::Duration;

use super::error::{GatewayError, GatewayResult};

/// Environment variable holding the ReqRes base URL
pub const BASE_URL_VAR: &str = "REQRES_URL";
/// Environment variable holding the ReqRes API key
pub const API_KEY_VAR: &str = "SECRET_KEY";
/// Environment variable overriding the login timeout (milliseconds)
pub const AUTH_TIMEOUT_VAR: &str = "REQRES_TIMEOUT_MS";

/// ReqRes gateway configuration
///
/// Built once at startup and owned by [`super::ReqResClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReqResConfig {
    /// Base URL without a trailing slash, e.g. `https://reqres.in/api`
    pub base_url: Option<String>,
    /// Value for the `x-api-key` header
    pub api_key: Option<String>,
    /// Timeout applied to the login call only
    pub auth_timeout: Duration,
}

impl Default for ReqResConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            auth_timeout: Duration::from_secs(5),
        }
    }
}

impl ReqResConfig {
    /// Config pointing at `base_url` (used by tests and local setups)
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(Some(base_url.into())),
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let auth_timeout = lookup(AUTH_TIMEOUT_VAR)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.auth_timeout);

        Self {
            base_url: normalize_base_url(lookup(BASE_URL_VAR)),
            api_key: lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty()),
            auth_timeout,
        }
    }

    /// Base URL, or `Misconfigured` naming the missing variable
    pub fn base_url(&self) -> GatewayResult<&str> {
        self.base_url
            .as_deref()
            .ok_or(GatewayError::Misconfigured(BASE_URL_VAR))
    }
}

fn normalize_base_url(raw: Option<String>) -> Option<String> {
    raw.map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}
