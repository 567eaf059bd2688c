//! Client configuration with environment overrides.

use std::env;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};
use crate::session::ApiSession;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request of a test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout; expiry is reported as a transport error.
    pub timeout: Duration,
    /// Sent as `x-api-key` when present.
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `REQRES_BASE_URL`, `REQRES_TIMEOUT_SECS` and
    /// `REQRES_API_KEY`.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Some(base_url) = non_empty_var("REQRES_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(raw) = non_empty_var("REQRES_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("REQRES_TIMEOUT_SECS must be a positive integer, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(ApiError::Config(
                    "REQRES_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        config.api_key = non_empty_var("REQRES_API_KEY");

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build a session scoped to this configuration.
    pub fn session(&self) -> ApiSession {
        ApiSession::new(self)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
