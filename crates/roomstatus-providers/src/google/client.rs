//! Google Calendar API client.
//!
//! Low-level HTTP access to the `events.list` endpoint: request building,
//! pagination, status mapping and conversion of API payloads to [`RawEvent`].

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::provider::EventQuery;
use crate::raw_event::{RawAttendee, RawEvent, RawEventTime, RawOrganizer, ResponseStatus};

/// Base URL for Google Calendar API v3.
pub(crate) const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Creates a client that authenticates with `access_token`.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> ProviderResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ProviderError::internal("failed to create HTTP client").with_source(e)
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    /// Lists events for `query`, following pages until `max_results` events
    /// were collected or the listing ends.
    pub async fn list_events(&self, query: &EventQuery) -> ProviderResult<Vec<RawEvent>> {
        let mut events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_events_page(query, page_token.as_deref()).await?;

            events.extend(
                page.items
                    .into_iter()
                    .filter_map(|event| convert_event(event, &query.calendar_id)),
            );

            if let Some(max) = query.max_results
                && events.len() >= max
            {
                events.truncate(max);
                break;
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            calendar_id = %query.calendar_id,
            count = events.len(),
            "fetched events from google"
        );
        Ok(events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        query: &EventQuery,
        page_token: Option<&str>,
    ) -> ProviderResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(&query.calendar_id)
        );

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", query.time_window.start.to_rfc3339()),
                ("timeMax", query.time_window.end.to_rfc3339()),
                ("singleEvents", query.expand_recurring.to_string()),
                ("orderBy", query.order_by.as_str().to_string()),
            ]);

        if let Some(max) = query.max_results {
            request = request.query(&[("maxResults", max.to_string())]);
        }

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                format!("request failed: {}", e)
            };
            ProviderError::network(message).with_source(e)
        })?;

        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            let mut err = status_error(status.as_u16(), &query.calendar_id, &body);
            if let Some(wait) = retry_after {
                err = err.with_retry_after(wait);
            }
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network("failed to read response").with_source(e))?;

        parse_event_list(&body)
    }
}

/// Maps a non-success HTTP status onto a [`ProviderError`].
pub(crate) fn status_error(status: u16, calendar_id: &str, body: &str) -> ProviderError {
    let err = match status {
        401 => ProviderError::authentication("access token expired or invalid"),
        403 => ProviderError::authorization(format!("access denied to calendar {}", calendar_id)),
        404 => ProviderError::not_found(format!("calendar {} not found", calendar_id)),
        429 => ProviderError::rate_limited("rate limit exceeded"),
        _ => ProviderError::server(format!("API error: {}", body.trim())),
    };
    err.with_http_status(status)
}

/// Parses an `events.list` response body.
pub(crate) fn parse_event_list(body: &str) -> ProviderResult<EventListResponse> {
    serde_json::from_str(body).map_err(|e| {
        ProviderError::invalid_response(format!("failed to parse response: {}", e))
    })
}

/// Converts an API event to a [`RawEvent`].
///
/// Returns `None` for cancelled entries and for entries whose start or end
/// cannot be read; the latter are logged.
pub(crate) fn convert_event(event: ApiEvent, calendar_id: &str) -> Option<RawEvent> {
    if event.status.as_deref() == Some("cancelled") {
        return None;
    }

    let id = event.id.unwrap_or_default();

    let Some(start) = event.start.as_ref().and_then(|t| parse_time(t, &id, "start")) else {
        warn!(event_id = %id, calendar_id, "skipping event without a usable start");
        return None;
    };
    let Some(end) = event.end.as_ref().and_then(|t| parse_time(t, &id, "end")) else {
        warn!(event_id = %id, calendar_id, "skipping event without a usable end");
        return None;
    };

    let attendees = event
        .attendees
        .unwrap_or_default()
        .into_iter()
        .map(|a| RawAttendee {
            email: a.email,
            display_name: a.display_name,
            is_self: a.is_self.unwrap_or(false),
            response_status: ResponseStatus::from_api(a.response_status.as_deref()),
        })
        .collect();

    let organizer = event.organizer.map(|o| RawOrganizer {
        display_name: o.display_name,
        email: o.email,
    });

    Some(RawEvent {
        id,
        start,
        end,
        summary: event.summary,
        visibility: event.visibility,
        status: event.status,
        organizer,
        attendees,
    })
}

/// Reads `dateTime` (preferred) or `date` from an API time.
fn parse_time(time: &ApiEventTime, id: &str, which: &str) -> Option<RawEventTime> {
    if let Some(ref dt) = time.date_time {
        return DateTime::parse_from_rfc3339(dt)
            .map_err(|e| warn!(event_id = %id, "failed to parse {} time {:?}: {}", which, dt, e))
            .ok()
            .map(|parsed| RawEventTime::DateTime(parsed.with_timezone(&Utc)));
    }
    if let Some(ref date) = time.date {
        return NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| warn!(event_id = %id, "failed to parse {} date {:?}: {}", which, date, e))
            .ok()
            .map(RawEventTime::Date);
    }
    None
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventListResponse {
    #[serde(default)]
    pub(crate) items: Vec<ApiEvent>,
    pub(crate) next_page_token: Option<String>,
}

/// A single event from the Google Calendar API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEvent {
    id: Option<String>,
    summary: Option<String>,
    start: Option<ApiEventTime>,
    end: Option<ApiEventTime>,
    status: Option<String>,
    visibility: Option<String>,
    organizer: Option<ApiPerson>,
    attendees: Option<Vec<ApiAttendee>>,
}

/// Event time from the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date: Option<String>,
    date_time: Option<String>,
}

/// Organizer from the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPerson {
    email: Option<String>,
    display_name: Option<String>,
}

/// Attendee from the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAttendee {
    email: Option<String>,
    display_name: Option<String>,
    #[serde(rename = "self")]
    is_self: Option<bool>,
    response_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(json: &str) -> Option<RawEvent> {
        let event: ApiEvent = serde_json::from_str(json).unwrap();
        convert_event(event, "room@example.com")
    }

    #[test]
    fn parse_event_list_response() {
        let json = r#"{
            "items": [
                {
                    "id": "event1",
                    "summary": "Design review",
                    "start": { "dateTime": "2024-03-15T10:00:00+01:00" },
                    "end": { "dateTime": "2024-03-15T11:00:00+01:00" },
                    "status": "confirmed"
                }
            ],
            "nextPageToken": "page-2"
        }"#;

        let response = parse_event_list(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.next_page_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn status_codes_map_to_error_codes() {
        use crate::ProviderErrorCode as Code;
        let cases = [
            (401, Code::AuthenticationFailed),
            (403, Code::AuthorizationFailed),
            (404, Code::NotFound),
            (429, Code::RateLimited),
            (500, Code::ServerError),
            (503, Code::ServerError),
        ];
        for (status, code) in cases {
            let err = status_error(status, "room@example.com", "");
            assert_eq!(err.code(), code, "status {}", status);
            assert_eq!(err.http_status(), Some(status));
        }
        assert!(
            status_error(403, "room@example.com", "")
                .message()
                .contains("room@example.com")
        );
    }

    #[test]
    fn unparseable_body_is_invalid_response() {
        let err = parse_event_list("<html>").unwrap_err();
        assert_eq!(err.code(), crate::ProviderErrorCode::InvalidResponse);
    }

    #[test]
    fn converts_timed_event_to_utc() {
        let raw = convert(
            r#"{
                "id": "e1",
                "summary": "Design review",
                "start": { "dateTime": "2024-03-15T10:00:00+01:00" },
                "end": { "dateTime": "2024-03-15T11:00:00+01:00" }
            }"#,
        )
        .unwrap();

        let expected: DateTime<Utc> = "2024-03-15T09:00:00Z".parse().unwrap();
        assert_eq!(raw.start, RawEventTime::DateTime(expected));
        assert_eq!(raw.summary.as_deref(), Some("Design review"));
    }

    #[test]
    fn converts_all_day_event() {
        let raw = convert(
            r#"{
                "id": "e2",
                "start": { "date": "2024-03-15" },
                "end": { "date": "2024-03-16" }
            }"#,
        )
        .unwrap();

        assert!(raw.start.is_all_day());
        assert!(raw.summary.is_none());
    }

    #[test]
    fn converts_organizer_and_attendees() {
        let raw = convert(
            r#"{
                "id": "e3",
                "start": { "dateTime": "2024-03-15T10:00:00Z" },
                "end": { "dateTime": "2024-03-15T11:00:00Z" },
                "visibility": "private",
                "organizer": { "email": "ana@example.com", "displayName": "Ana" },
                "attendees": [
                    { "email": "ana@example.com", "responseStatus": "accepted" },
                    { "email": "room@example.com", "self": true, "responseStatus": "declined" }
                ]
            }"#,
        )
        .unwrap();

        assert!(raw.is_private());
        assert!(raw.is_declined_by_self());
        let organizer = raw.organizer.unwrap();
        assert_eq!(organizer.display_name.as_deref(), Some("Ana"));
        assert_eq!(raw.attendees.len(), 2);
    }

    #[test]
    fn skips_cancelled_and_malformed_events() {
        assert!(
            convert(
                r#"{
                    "id": "c",
                    "status": "cancelled",
                    "start": { "dateTime": "2024-03-15T10:00:00Z" },
                    "end": { "dateTime": "2024-03-15T11:00:00Z" }
                }"#
            )
            .is_none()
        );

        // no start at all
        assert!(convert(r#"{ "id": "m1", "end": { "date": "2024-03-16" } }"#).is_none());

        // start present but empty
        assert!(
            convert(r#"{ "id": "m2", "start": {}, "end": { "date": "2024-03-16" } }"#).is_none()
        );

        // garbage end
        assert!(
            convert(
                r#"{
                    "id": "m3",
                    "start": { "dateTime": "2024-03-15T10:00:00Z" },
                    "end": { "dateTime": "tomorrow-ish" }
                }"#
            )
            .is_none()
        );
    }
}
