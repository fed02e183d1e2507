//! Raw event type returned by calendar services.
//!
//! [`RawEvent`] carries only the fields a room panel consumes. Services are
//! expected to drop entries they cannot express as a `RawEvent` (no start or
//! end) instead of failing the whole listing.

use chrono::{DateTime, NaiveDate, Utc};
use roomstatus_core::EventTime;
use serde::{Deserialize, Serialize};

/// The time specification for a raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawEventTime {
    /// A specific instant.
    DateTime(DateTime<Utc>),
    /// A date-only (all-day) bound.
    Date(NaiveDate),
}

impl RawEventTime {
    /// Returns true if this is an all-day bound.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl From<RawEventTime> for EventTime {
    fn from(raw: RawEventTime) -> Self {
        match raw {
            RawEventTime::DateTime(dt) => EventTime::from_utc(dt),
            RawEventTime::Date(date) => EventTime::from_date(date),
        }
    }
}

/// An attendee's answer to an invitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
    #[default]
    Unknown,
}

impl ResponseStatus {
    /// Parses the Google Calendar spelling of a response status.
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => Self::Accepted,
            Some("declined") => Self::Declined,
            Some("tentative") => Self::Tentative,
            Some("needsAction") => Self::NeedsAction,
            _ => Self::Unknown,
        }
    }
}

/// An attendee of a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendee {
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Whether this entry is the identity that made the query.
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub response_status: ResponseStatus,
}

impl RawAttendee {
    pub fn new(email: impl Into<String>, response_status: ResponseStatus) -> Self {
        Self {
            email: Some(email.into()),
            display_name: None,
            is_self: false,
            response_status,
        }
    }

    /// Builder method to mark this attendee as the querying identity.
    pub fn as_self(mut self) -> Self {
        self.is_self = true;
        self
    }
}

/// The organizer of a calendar event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrganizer {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// A raw calendar event from a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Service-specific identifier, used for logging.
    pub id: String,
    pub start: RawEventTime,
    pub end: RawEventTime,
    #[serde(default)]
    pub summary: Option<String>,
    /// Visibility as reported by the service ("default", "public", "private", ...).
    #[serde(default)]
    pub visibility: Option<String>,
    /// Event status ("confirmed", "tentative", "cancelled").
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub organizer: Option<RawOrganizer>,
    /// Empty when the service reported no attendee list.
    #[serde(default)]
    pub attendees: Vec<RawAttendee>,
}

impl RawEvent {
    /// Creates a new raw event with the minimum required fields.
    pub fn new(id: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            summary: None,
            visibility: None,
            status: None,
            organizer: None,
            attendees: Vec::new(),
        }
    }

    /// Returns true if the entry is hidden from readers of the calendar.
    pub fn is_private(&self) -> bool {
        self.visibility
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("private") || v.eq_ignore_ascii_case("confidential"))
    }

    /// Returns true if the event is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }

    /// Returns the attendee entry of the querying identity, if listed.
    pub fn self_attendee(&self) -> Option<&RawAttendee> {
        self.attendees.iter().find(|a| a.is_self)
    }

    /// Returns true if the querying identity declined the invitation.
    pub fn is_declined_by_self(&self) -> bool {
        self.self_attendee()
            .is_some_and(|a| a.response_status == ResponseStatus::Declined)
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_organizer(mut self, display_name: Option<&str>, email: Option<&str>) -> Self {
        self.organizer = Some(RawOrganizer {
            display_name: display_name.map(String::from),
            email: email.map(String::from),
        });
        self
    }

    pub fn with_attendee(mut self, attendee: RawAttendee) -> Self {
        self.attendees.push(attendee);
        self
    }
}
