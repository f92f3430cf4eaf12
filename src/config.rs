//! Client configuration.
//!
//! Values normally come from the environment:
//!
//! - `ETHOS_PROXY_URL` (required) - Base URL of the token-issuing proxy
//! - `ETHOS_API_KEY` (required) - Key presented to the proxy's `auth` endpoint
//! - `ETHOS_API_HEADER` (optional) - Media type sent as `Accept`/`Content-Type`
//! - `ETHOS_TIMEOUT_SECS` (optional) - Per-request timeout, in seconds

use std::env;
use std::time::Duration;

use crate::error::{EthosError, Result};

/// Default media type for versioned Ethos resources.
pub const DEFAULT_API_HEADER: &str = "application/vnd.hedtech.integration.v6+json";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const PROXY_URL_VAR: &str = "ETHOS_PROXY_URL";
pub const API_KEY_VAR: &str = "ETHOS_API_KEY";
pub const API_HEADER_VAR: &str = "ETHOS_API_HEADER";
pub const TIMEOUT_VAR: &str = "ETHOS_TIMEOUT_SECS";

/// Settings needed to open a session against the Ethos proxy.
#[derive(Clone)]
pub struct EthosConfig {
    /// Proxy base URL; `auth` and `api/` are resolved against it.
    pub proxy_url: String,
    /// Credential exchanged for a session token.
    pub api_key: String,
    /// Media type for `Accept` and `Content-Type` on versioned requests.
    pub api_header: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for EthosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthosConfig")
            .field("proxy_url", &self.proxy_url)
            .field("api_header", &self.api_header)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EthosConfig {
    /// Create a configuration with default header and timeout.
    pub fn new(proxy_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
            api_key: api_key.into(),
            api_header: DEFAULT_API_HEADER.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the media type header.
    #[must_use]
    pub fn with_api_header(mut self, api_header: impl Into<String>) -> Self {
        self.api_header = api_header.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::ConfigMissing`] if a required variable is unset
    /// or `ETHOS_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    EthosError::ConfigMissing(format!("{key} environment variable not set"))
                })
        };

        let mut config = Self::new(required(PROXY_URL_VAR)?, required(API_KEY_VAR)?);

        if let Some(header) = lookup(API_HEADER_VAR).filter(|v| !v.is_empty()) {
            config.api_header = header;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                EthosError::ConfigMissing(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_required_vars_only() {
        let config = EthosConfig::from_lookup(lookup(&[
            (PROXY_URL_VAR, "https://proxy.example.edu/"),
            (API_KEY_VAR, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.proxy_url, "https://proxy.example.edu/");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_header, DEFAULT_API_HEADER);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_api_key() {
        let err = EthosConfig::from_lookup(lookup(&[(PROXY_URL_VAR, "https://proxy")]))
            .unwrap_err();
        assert!(matches!(err, EthosError::ConfigMissing(ref m) if m.contains(API_KEY_VAR)));
    }

    #[test]
    fn test_empty_proxy_url_counts_as_missing() {
        let err = EthosConfig::from_lookup(lookup(&[(PROXY_URL_VAR, ""), (API_KEY_VAR, "k")]))
            .unwrap_err();
        assert!(matches!(err, EthosError::ConfigMissing(ref m) if m.contains(PROXY_URL_VAR)));
    }

    #[test]
    fn test_optional_overrides() {
        let config = EthosConfig::from_lookup(lookup(&[
            (PROXY_URL_VAR, "https://proxy"),
            (API_KEY_VAR, "k"),
            (API_HEADER_VAR, "application/json"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_header, "application/json");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout() {
        let err = EthosConfig::from_lookup(lookup(&[
            (PROXY_URL_VAR, "https://proxy"),
            (API_KEY_VAR, "k"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, EthosError::ConfigMissing(ref m) if m.contains("soon")));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = EthosConfig::new("https://proxy", "super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("https://proxy"));
        assert!(!debug.contains("super-secret"));
    }
}
