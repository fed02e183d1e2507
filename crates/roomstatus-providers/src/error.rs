//! Error type for calendar service calls.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Why a calendar service call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// Missing, invalid or expired credentials (HTTP 401).
    AuthenticationFailed,
    /// Credentials valid but the room calendar is not shared with them (HTTP 403).
    AuthorizationFailed,
    /// Transport failure: connect, timeout, DNS, TLS.
    NetworkError,
    /// Quota exhausted (HTTP 429).
    RateLimited,
    /// Any other non-success status.
    ServerError,
    /// Body could not be decoded.
    InvalidResponse,
    /// Unknown calendar id (HTTP 404).
    NotFound,
    /// Bad or unreadable service settings.
    ConfigurationError,
    InternalError,
}

impl ProviderErrorCode {
    /// True when the same call may succeed on the next cache refresh.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::RateLimited | Self::ServerError
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::NotFound => "not_found",
            Self::ConfigurationError => "configuration_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed calendar service call.
///
/// Carries a [`ProviderErrorCode`], a human message, the name of the service
/// that failed and, when known, the HTTP status and the server's retry hint.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    provider: Option<String>,
    http_status: Option<u16>,
    retry_after: Option<Duration>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Generates one shorthand constructor per code.
macro_rules! constructors {
    ($($name:ident => $code:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `", stringify!($code), "` error.")]
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ProviderErrorCode::$code, message)
            }
        )*
    };
}

impl ProviderError {
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider: None,
            http_status: None,
            retry_after: None,
            source: None,
        }
    }

    constructors! {
        authentication => AuthenticationFailed,
        authorization => AuthorizationFailed,
        network => NetworkError,
        rate_limited => RateLimited,
        server => ServerError,
        invalid_response => InvalidResponse,
        not_found => NotFound,
        configuration => ConfigurationError,
        internal => InternalError,
    }

    /// Names the service that failed (e.g. "google").
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Records the HTTP status that produced this error.
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Records how long the server asked us to wait.
    pub fn with_retry_after(mut self, wait: Duration) -> Self {
        self.retry_after = Some(wait);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    /// Copies everything except the source, which is not `Clone`.
    pub fn detached(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            provider: self.provider.clone(),
            http_status: self.http_status,
            retry_after: self.retry_after,
            source: None,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(status) = self.http_status {
            write!(f, " (HTTP {})", status)?;
        }
        Ok(())
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_codes() {
        assert!(ProviderError::network("reset").is_retryable());
        assert!(ProviderError::rate_limited("quota").is_retryable());
        assert!(ProviderError::server("502").is_retryable());
        assert!(!ProviderError::authentication("expired").is_retryable());
        assert!(!ProviderError::not_found("gone").is_retryable());
        assert!(!ProviderError::configuration("empty token").is_retryable());
    }

    #[test]
    fn constructors_set_code() {
        assert_eq!(
            ProviderError::authorization("x").code(),
            ProviderErrorCode::AuthorizationFailed
        );
        assert_eq!(
            ProviderError::invalid_response("x").code(),
            ProviderErrorCode::InvalidResponse
        );
        assert_eq!(
            ProviderError::internal("x").code(),
            ProviderErrorCode::InternalError
        );
    }

    #[test]
    fn display_includes_provider_code_and_status() {
        let err = ProviderError::rate_limited("quota exhausted")
            .with_provider("google")
            .with_http_status(429)
            .with_retry_after(Duration::from_secs(30));
        assert_eq!(
            err.to_string(),
            "[google] rate_limited: quota exhausted (HTTP 429)"
        );
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert_eq!(err.http_status(), Some(429));
    }

    #[test]
    fn display_bare() {
        let err = ProviderError::authentication("token expired");
        assert_eq!(err.to_string(), "authentication_failed: token expired");
        assert_eq!(err.message(), "token expired");
        assert!(err.provider().is_none());
    }

    #[test]
    fn detached_copy_drops_source_only() {
        use std::error::Error;
        let err = ProviderError::network("read failed")
            .with_provider("google")
            .with_source(std::io::Error::other("connection reset"));
        assert!(err.source().is_some());

        let copy = err.detached();
        assert!(copy.source().is_none());
        assert_eq!(copy.to_string(), err.to_string());
    }
}
