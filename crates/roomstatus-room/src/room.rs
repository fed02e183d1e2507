//! The room status entity.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use roomstatus_core::{Clock, DisplayEvent, TimeWindow};
use roomstatus_providers::{CalendarService, EventQuery, ProviderError};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::EventCache;
use crate::config::{Rgb, RoomConfig, RoomSettings};
use crate::error::{RoomError, RoomResult};
use crate::snapshot::RoomSnapshot;
use crate::status::RoomStatus;
use crate::transform::to_display_events;

/// One meeting room and the cached state of its calendar.
///
/// Every query goes through [`Room::events`], which refreshes the cache from
/// the calendar service once it has expired. The cache lock is held across
/// the whole check-fetch-replace sequence, so concurrent callers share a
/// single refresh.
pub struct Room {
    config: RoomConfig,
    settings: RoomSettings,
    service: Arc<dyn CalendarService>,
    clock: Arc<dyn Clock>,
    cache: Mutex<EventCache>,
}

impl Room {
    /// Creates a room. The cache starts expired, so the first query refreshes.
    pub fn new(
        config: RoomConfig,
        settings: RoomSettings,
        service: Arc<dyn CalendarService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = EventCache::expired_at(clock.now());
        Self {
            config,
            settings,
            service,
            clock,
            cache: Mutex::new(cache),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn style_class(&self) -> &str {
        &self.config.style_class
    }

    pub fn presence_colour(&self) -> Rgb {
        self.config.presence_colour
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Returns today's remaining events, sorted by start, refreshing first if
    /// the cache has expired.
    ///
    /// Within one TTL every call returns the same allocation.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::Refresh`] when the calendar service fails. The
    /// cache is left untouched so the next call retries, unless
    /// `serve_stale_on_error` is set and an earlier refresh succeeded, in
    /// which case the previous list is returned.
    pub async fn events(&self) -> RoomResult<Arc<Vec<DisplayEvent>>> {
        let mut cache = self.cache.lock().await;
        let now = self.clock.now();

        if !cache.is_expired(now) {
            debug!(room = %self.config.name, expires_at = %cache.expires_at(), "cache hit");
            return Ok(cache.events());
        }

        match self.fetch(now).await {
            Ok(events) => {
                info!(room = %self.config.name, count = events.len(), "refreshed events");
                cache.replace(events, now, self.settings.cache_ttl);
                Ok(cache.events())
            }
            Err(e) if self.settings.serve_stale_on_error && cache.has_data() => {
                warn!(
                    room = %self.config.name,
                    error = %e,
                    refreshed_at = ?cache.refreshed_at(),
                    "refresh failed, serving stale events"
                );
                Ok(cache.events())
            }
            Err(e) => {
                warn!(room = %self.config.name, error = %e, "refresh failed");
                Err(RoomError::refresh(&self.config.name, e))
            }
        }
    }

    async fn fetch(
        &self,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<DisplayEvent>, ProviderError> {
        let query = EventQuery::new(&self.config.calendar_id, TimeWindow::today_remaining(now))
            .with_max_results(self.settings.max_results);

        debug!(
            room = %self.config.name,
            service = self.service.name(),
            calendar_id = %query.calendar_id,
            "refreshing events"
        );

        let raw = self.service.list_events(query).await?;
        Ok(to_display_events(&raw, now))
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }

    /// True if no event is in progress.
    pub async fn is_empty(&self) -> RoomResult<bool> {
        let events = self.events().await?;
        Ok(RoomStatus::new(&events).is_empty())
    }

    /// True if any remaining event today is not in progress.
    pub async fn has_upcoming_event_today(&self) -> RoomResult<bool> {
        let events = self.events().await?;
        Ok(RoomStatus::new(&events).has_upcoming_event_today())
    }

    /// Start of the next booking, or "Tomorrow".
    pub async fn empty_until_label(&self) -> RoomResult<String> {
        let events = self.events().await?;
        Ok(RoomStatus::new(&events).empty_until_label().to_string())
    }

    pub async fn minutes_to_next_event(&self) -> RoomResult<Option<i64>> {
        let events = self.events().await?;
        Ok(RoomStatus::new(&events).minutes_to_next_event(self.now_utc()))
    }

    pub async fn minutes_to_end_of_event(&self) -> RoomResult<Option<i64>> {
        let events = self.events().await?;
        Ok(RoomStatus::new(&events).minutes_to_end_of_event(self.now_utc()))
    }

    /// Evaluates every query against a single `events()` call.
    pub async fn snapshot(&self) -> RoomResult<RoomSnapshot> {
        let events = self.events().await?;
        Ok(RoomSnapshot::build(&self.config, &events, self.clock.now()))
    }
}

impl std::fmt::Debug for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("config", &self.config)
            .field("settings", &self.settings)
            .field("service", &self.service.name())
            .finish_non_exhaustive()
    }
}
