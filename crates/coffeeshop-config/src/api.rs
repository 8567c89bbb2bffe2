//! Backend API configuration.
//!
//! # Environment Variables
//!
//! - `API_SERVER_URL`: base URL of the running backend (default: `http://127.0.0.1:5000`)
//! - `API_TIMEOUT_SECS`: per-request timeout in seconds (default: unset, requests
//!   wait indefinitely)

use std::env;
use std::time::Duration;

/// Default backend location, matching the backend's development server.
pub const DEFAULT_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Where the backend lives and how requests to it are made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://coffee.example.com`.
    pub api_server_url: String,

    /// Optional per-request timeout. `None` means no timeout is applied.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_SERVER_URL)
    }
}

impl ApiConfig {
    /// Builds a config for the given base URL with no request timeout.
    ///
    /// Trailing slashes are stripped so paths can be appended with `/{collection}`.
    pub fn new(api_server_url: impl Into<String>) -> Self {
        Self {
            api_server_url: normalize_base_url(&api_server_url.into()),
            request_timeout: None,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when variables are unset or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let api_server_url =
            env::var("API_SERVER_URL").unwrap_or_else(|_| DEFAULT_API_SERVER_URL.to_string());

        Self {
            api_server_url: normalize_base_url(&api_server_url),
            request_timeout: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// Strip surrounding whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
