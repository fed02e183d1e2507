//! Event bounds and query windows.
//!
//! Calendar entries are bounded either by instants or, for all-day entries,
//! by bare dates. [`EventTime`] keeps that distinction until display time.
//! [`TimeWindow`] is the `[start, end)` range a room asks its calendar for,
//! normally "from now until local midnight".

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// One bound (start or end) of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    DateTime(DateTime<Utc>),
    /// Date-only bound. An end date is exclusive.
    AllDay(NaiveDate),
}

impl EventTime {
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// The instant, or `None` for a date-only bound.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::DateTime(dt) => Some(dt),
            Self::AllDay(_) => None,
        }
    }

    /// The calendar date of this bound as seen from `offset`.
    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        match *self {
            Self::DateTime(dt) => dt.with_timezone(offset).date_naive(),
            Self::AllDay(date) => date,
        }
    }

    /// Instant used for sorting and window checks; dates count from UTC midnight.
    pub fn sort_key(&self) -> DateTime<Utc> {
        match *self {
            Self::DateTime(dt) => dt,
            Self::AllDay(date) => date.and_time(NaiveTime::MIN).and_utc(),
        }
    }
}

/// Half-open `[start, end)` range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a window. A reversed range is collapsed to an empty window at
    /// `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// From `now` until the next midnight in `now`'s offset.
    pub fn today_remaining(now: DateTime<FixedOffset>) -> Self {
        Self::new(now.with_timezone(&Utc), end_of_day(now).with_timezone(&Utc))
    }

    /// True if an entry bounded by `start` and `end` overlaps this window.
    pub fn overlaps(&self, start: &EventTime, end: &EventTime) -> bool {
        start.sort_key() < self.end && end.sort_key() > self.start
    }
}

/// The next midnight after `now`, in `now`'s own offset.
pub fn end_of_day(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let midnight = now
        .date_naive()
        .succ_opt()
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN);
    midnight
        .and_local_timezone(*now.offset())
        .single()
        .unwrap_or(now)
}
