//! Google Calendar service configuration.

use std::time::Duration;

use super::client::CALENDAR_API_BASE;

/// Default HTTP timeout for API requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`GoogleCalendarService`](super::GoogleCalendarService).
#[derive(Clone)]
pub struct GoogleConfig {
    /// OAuth access token sent as a bearer token.
    pub access_token: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// API base URL, overridable for tests against a local server.
    pub base_url: String,
    pub user_agent: String,
}

impl GoogleConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
            base_url: CALENDAR_API_BASE.to_string(),
            user_agent: concat!("roomstatus/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method to point at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.access_token.trim().is_empty() {
            return Err("access_token is required".to_string());
        }
        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
