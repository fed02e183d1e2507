//! Display-ready event records.
//!
//! A [`DisplayEvent`] is the normalized projection of a raw calendar entry
//! that a room panel renders. It is produced once per cache refresh and never
//! mutated afterwards.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{date_label, time_of_day};
use crate::time::EventTime;

/// Text shown for hidden or missing summaries and organizers.
pub const PLACEHOLDER: &str = "Private or unspecified";

/// A display-ready view of one calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEvent {
    /// The event summary, or [`PLACEHOLDER`].
    pub summary: String,
    /// Start instant; `None` for all-day entries.
    pub start_time: Option<DateTime<Utc>>,
    /// End instant; `None` for all-day entries.
    pub end_time: Option<DateTime<Utc>>,
    /// Start as shown on the panel.
    pub start_time_display: String,
    /// End as shown on the panel.
    pub end_time_display: String,
    /// Organizer display name, email, or [`PLACEHOLDER`].
    pub organizer: String,
    /// Whether the entry was in progress when the cache was refreshed.
    pub is_now: bool,
    /// Whether this is a date-only entry.
    pub all_day: bool,
}

impl DisplayEvent {
    /// Builds a display event from resolved start/end times.
    ///
    /// `now` is the refresh instant; its offset drives both the time-of-day
    /// strings and the local date used for all-day occupancy.
    pub fn new(
        summary: impl Into<String>,
        start: EventTime,
        end: EventTime,
        organizer: impl Into<String>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let offset = now.offset();
        Self {
            summary: summary.into(),
            start_time: start.instant(),
            end_time: end.instant(),
            start_time_display: display_time(&start, offset),
            end_time_display: display_time(&end, offset),
            organizer: organizer.into(),
            is_now: is_in_progress(&start, &end, now),
            all_day: start.is_all_day(),
        }
    }

    /// Whole minutes from `now` until the start, truncated toward zero.
    pub fn minutes_until_start(&self, now: DateTime<Utc>) -> Option<i64> {
        self.start_time.map(|start| (start - now).num_minutes())
    }

    /// Whole minutes from `now` until the end, truncated toward zero.
    pub fn minutes_until_end(&self, now: DateTime<Utc>) -> Option<i64> {
        self.end_time.map(|end| (end - now).num_minutes())
    }
}

fn display_time(time: &EventTime, offset: &FixedOffset) -> String {
    match time {
        EventTime::DateTime(dt) => time_of_day(*dt, offset),
        EventTime::AllDay(date) => date_label(*date),
    }
}

/// Half-open `[start, end)` containment.
///
/// Date-only bounds compare against `now`'s local date, with the end date
/// exclusive.
fn is_in_progress(start: &EventTime, end: &EventTime, now: DateTime<FixedOffset>) -> bool {
    match (start, end) {
        (EventTime::DateTime(s), EventTime::DateTime(e)) => {
            let now = now.with_timezone(&Utc);
            *s <= now && now < *e
        }
        _ => {
            let offset = now.offset();
            let today = now.date_naive();
            start.local_date(offset) <= today && today < end.local_date(offset)
        }
    }
}
