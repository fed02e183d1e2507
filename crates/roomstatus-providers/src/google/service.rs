//! [`CalendarService`] implementation for Google Calendar.

use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{BoxFuture, CalendarService, EventQuery};
use crate::raw_event::RawEvent;

use super::client::GoogleCalendarClient;
use super::config::GoogleConfig;

const NAME: &str = "google";

/// Google Calendar service.
///
/// Reads a room calendar through the Calendar API v3 using a pre-issued
/// access token. Token acquisition and renewal happen outside this crate.
#[derive(Debug)]
pub struct GoogleCalendarService {
    client: GoogleCalendarClient,
}

impl GoogleCalendarService {
    /// Creates a service from `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid, or an internal
    /// error if the HTTP client cannot be built.
    pub fn new(config: GoogleConfig) -> ProviderResult<Self> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(e).with_provider(NAME))?;

        let client = GoogleCalendarClient::new(
            config.base_url,
            config.access_token,
            config.timeout,
            &config.user_agent,
        )
        .map_err(|e| e.with_provider(NAME))?;

        Ok(Self { client })
    }
}

impl CalendarService for GoogleCalendarService {
    fn name(&self) -> &str {
        NAME
    }

    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        Box::pin(async move {
            debug!(
                calendar_id = %query.calendar_id,
                start = %query.time_window.start,
                end = %query.time_window.end,
                "listing google events"
            );
            self.client
                .list_events(&query)
                .await
                .map_err(|e| e.with_provider(NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;

    #[test]
    fn rejects_invalid_config() {
        let err = GoogleCalendarService::new(GoogleConfig::new("")).unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);
        assert_eq!(err.provider(), Some("google"));
    }

    #[test]
    fn builds_with_token() {
        let service = GoogleCalendarService::new(GoogleConfig::new("token")).unwrap();
        assert_eq!(service.name(), "google");
    }
}
