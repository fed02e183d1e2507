//! CalendarService trait definition.
//!
//! This module defines [`CalendarService`], the seam between a room and
//! whatever backend holds its bookings, plus two small implementations that
//! need no network: [`StaticService`] and [`ErrorService`].

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use roomstatus_core::{EventTime, TimeWindow};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::RawEvent;

/// Result ordering requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    /// Ascending by start time. Requires expanded recurring events.
    #[default]
    StartTime,
}

impl OrderBy {
    /// Returns the Google Calendar spelling of this ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartTime => "startTime",
        }
    }
}

/// A single event listing request.
#[derive(Debug, Clone)]
pub struct EventQuery {
    /// Calendar to read.
    pub calendar_id: String,
    /// Events overlapping this window are returned.
    pub time_window: TimeWindow,
    /// Maximum number of events to return.
    pub max_results: Option<usize>,
    /// Whether to expand recurring events into single occurrences.
    pub expand_recurring: bool,
    pub order_by: OrderBy,
}

impl EventQuery {
    /// Creates a query for expanded occurrences ordered by start time.
    pub fn new(calendar_id: impl Into<String>, time_window: TimeWindow) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            time_window,
            max_results: None,
            expand_recurring: true,
            order_by: OrderBy::StartTime,
        }
    }

    /// Builder method to set max results.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// A boxed future for async trait methods.
///
/// Boxing keeps [`CalendarService`] object-safe so a room can hold an
/// `Arc<dyn CalendarService>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of calendar events.
///
/// Implementations must:
/// - return events overlapping `query.time_window`, ordered by start time
/// - honour `max_results` when set
/// - drop entries without a usable start or end (logging them) rather than
///   failing the listing
/// - handle pagination and transport internally
pub trait CalendarService: Send + Sync {
    /// Returns the name of this service (e.g. "google", "static").
    fn name(&self) -> &str;

    /// Lists the events matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network errors, authentication failures,
    /// quota exhaustion, or unparseable responses.
    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>>;
}

/// A service backed by an in-memory list of events.
///
/// Applies the query window and `max_results` the way a real backend would
/// and counts how often it was called.
#[derive(Debug, Default)]
pub struct StaticService {
    events: Mutex<Vec<RawEvent>>,
    calls: AtomicUsize,
}

impl StaticService {
    /// Creates a service that serves `events`.
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            calls: AtomicUsize::new(0),
        }
    }

    /// Loads events from a JSON array of [`RawEvent`].
    pub fn from_json(json: &str) -> ProviderResult<Self> {
        let events: Vec<RawEvent> = serde_json::from_str(json).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse events: {}", e))
                .with_provider("static")
        })?;
        Ok(Self::new(events))
    }

    /// Loads events from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProviderError::configuration(format!(
                "failed to read events file {}",
                path.display()
            ))
            .with_provider("static")
            .with_source(e)
        })?;
        Self::from_json(&content)
    }

    /// Replaces the served events.
    pub fn set_events(&self, events: Vec<RawEvent>) {
        *self.events.lock().unwrap_or_else(|e| e.into_inner()) = events;
    }

    /// Number of `list_events` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CalendarService for StaticService {
    fn name(&self) -> &str {
        "static"
    }

    fn list_events(&self, query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let window = &query.time_window;
        let mut events: Vec<RawEvent> = self
            .events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| !e.is_cancelled())
            .filter(|e| window.overlaps(&EventTime::from(e.start), &EventTime::from(e.end)))
            .cloned()
            .collect();

        events.sort_by_key(|e| EventTime::from(e.start).sort_key());
        if let Some(max) = query.max_results {
            events.truncate(max);
        }

        debug!(
            calendar_id = %query.calendar_id,
            count = events.len(),
            "served static events"
        );
        Box::pin(async move { Ok(events) })
    }
}

/// A service that always fails with the same error.
///
/// Useful as a placeholder when a real service fails to initialize.
#[derive(Debug)]
pub struct ErrorService {
    name: String,
    error: ProviderError,
}

impl ErrorService {
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }
}

impl CalendarService for ErrorService {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_events(&self, _query: EventQuery) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        let error = self.error.detached().with_provider(&self.name);
        Box::pin(async move { Err(error) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use crate::raw_event::RawEventTime;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, h, m, 0).unwrap()
    }

    fn event(id: &str, start: DateTime<Utc>, minutes: i64) -> RawEvent {
        RawEvent::new(
            id,
            RawEventTime::DateTime(start),
            RawEventTime::DateTime(start + Duration::minutes(minutes)),
        )
    }

    fn query() -> EventQuery {
        EventQuery::new("room@example.com", TimeWindow::new(at(10, 0), at(18, 0)))
    }

    #[test]
    fn query_defaults() {
        let q = query().with_max_results(5);
        assert_eq!(q.max_results, Some(5));
        assert!(q.expand_recurring);
        assert_eq!(q.order_by.as_str(), "startTime");
    }

    #[tokio::test]
    async fn static_service_filters_sorts_and_limits() {
        let service = StaticService::new(vec![
            event("late", at(16, 0), 30),
            event("ongoing", at(9, 30), 60),
            event("finished", at(8, 0), 60),
            event("tomorrow", at(18, 0), 60),
            event("cancelled", at(12, 0), 30).with_status("cancelled"),
            event("early", at(11, 0), 30),
        ]);

        let events = service.list_events(query()).await.unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ongoing", "early", "late"]);

        let events = service.list_events(query().with_max_results(2)).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(service.calls(), 2);
    }

    #[tokio::test]
    async fn static_service_from_json() {
        let json = r#"[{
            "id": "a",
            "start": { "date_time": "2025-02-05T12:00:00Z" },
            "end": { "date_time": "2025-02-05T13:00:00Z" },
            "summary": "Planning"
        }]"#;
        let service = StaticService::from_json(json).unwrap();
        let events = service.list_events(query()).await.unwrap();
        assert_eq!(events[0].summary.as_deref(), Some("Planning"));
    }

    #[test]
    fn static_service_rejects_bad_json() {
        let err = StaticService::from_json("{not json").unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
    }

    #[tokio::test]
    async fn error_service_returns_error() {
        let service = ErrorService::new("google", ProviderError::authentication("no token"));
        assert_eq!(service.name(), "google");

        let err = service.list_events(query()).await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
        assert_eq!(err.provider(), Some("google"));
    }
}
