//! Occupancy and countdown queries over a cached event list.
//!
//! Everything here is pure: the same list and instant give the same answer.
//! `is_now` flags come from the refresh instant, minute counts from the
//! instant passed in.

use chrono::{DateTime, Utc};
use roomstatus_core::DisplayEvent;

/// Label shown when nothing else is booked today.
pub const TOMORROW: &str = "Tomorrow";

/// Read-only view over a room's events, sorted by start ascending.
#[derive(Debug, Clone, Copy)]
pub struct RoomStatus<'a> {
    events: &'a [DisplayEvent],
}

impl<'a> RoomStatus<'a> {
    pub fn new(events: &'a [DisplayEvent]) -> Self {
        Self { events }
    }

    /// No event is in progress.
    pub fn is_empty(&self) -> bool {
        !self.events.iter().any(|e| e.is_now)
    }

    /// At least one event is not in progress.
    pub fn has_upcoming_event_today(&self) -> bool {
        self.events.iter().any(|e| !e.is_now)
    }

    /// First event that is not in progress.
    pub fn next_upcoming(&self) -> Option<&'a DisplayEvent> {
        self.events.iter().find(|e| !e.is_now)
    }

    /// When the room stops being free: the next event's start, or [`TOMORROW`].
    pub fn empty_until_label(&self) -> &'a str {
        self.next_upcoming()
            .map(|e| e.start_time_display.as_str())
            .unwrap_or(TOMORROW)
    }

    /// Whole minutes until the next booking starts.
    ///
    /// While free that is the first event. While occupied it is the second
    /// event, provided something later today is not yet in progress; with
    /// overlapping bookings that second event may itself be running, and
    /// the count goes negative.
    pub fn minutes_to_next_event(&self, now: DateTime<Utc>) -> Option<i64> {
        self.next_slot().and_then(|e| e.minutes_until_start(now))
    }

    /// The event [`minutes_to_next_event`](Self::minutes_to_next_event)
    /// counts down to.
    pub fn next_slot(&self) -> Option<&'a DisplayEvent> {
        if self.is_empty() {
            self.events.first()
        } else if self.has_upcoming_event_today() {
            self.events.get(1)
        } else {
            None
        }
    }

    /// Whole minutes until the first event ends.
    ///
    /// Reported even when the room is free, in which case it is the end of
    /// the next booking.
    pub fn minutes_to_end_of_event(&self, now: DateTime<Utc>) -> Option<i64> {
        self.events.first().and_then(|e| e.minutes_until_end(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, TimeZone};
    use roomstatus_core::EventTime;

    fn refresh_at() -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 2, 5, 10, 0, 0)
            .unwrap()
    }

    fn event(start: DateTime<Utc>, minutes: i64) -> DisplayEvent {
        DisplayEvent::new(
            "Meeting",
            EventTime::from_utc(start),
            EventTime::from_utc(start + Duration::minutes(minutes)),
            "Ana",
            refresh_at(),
        )
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, h, m, 0).unwrap()
    }

    mod scenarios {
        use super::*;

        #[test]
        fn empty_with_upcoming() {
            let events = vec![event(at(10, 30), 30)];
            let now = at(10, 0);
            let status = RoomStatus::new(&events);

            assert!(status.is_empty());
            assert!(status.has_upcoming_event_today());
            assert_eq!(status.empty_until_label(), "10:30 AM");
            assert_eq!(status.minutes_to_next_event(now), Some(30));
            assert_eq!(status.minutes_to_end_of_event(now), Some(60));
        }

        #[test]
        fn occupied_then_free() {
            let events = vec![event(at(9, 30), 60)];
            let now = at(10, 0);
            let status = RoomStatus::new(&events);

            assert!(!status.is_empty());
            assert!(!status.has_upcoming_event_today());
            assert_eq!(status.empty_until_label(), TOMORROW);
            assert_eq!(status.minutes_to_next_event(now), None);
            assert_eq!(status.minutes_to_end_of_event(now), Some(30));
        }

        #[test]
        fn occupied_with_next() {
            let events = vec![event(at(9, 30), 60), event(at(11, 0), 30)];
            let now = at(10, 0);
            let status = RoomStatus::new(&events);

            assert!(!status.is_empty());
            assert!(status.has_upcoming_event_today());
            assert_eq!(status.empty_until_label(), "11:00 AM");
            assert_eq!(status.minutes_to_next_event(now), Some(60));
            assert_eq!(status.minutes_to_end_of_event(now), Some(30));
        }

        #[test]
        fn occupied_with_overlap_counts_to_second_slot() {
            let events = vec![
                event(at(9, 30), 60),
                event(at(9, 45), 75),
                event(at(11, 0), 30),
            ];
            let now = at(10, 0);
            let status = RoomStatus::new(&events);

            assert!(!status.is_empty());
            assert!(status.has_upcoming_event_today());
            assert_eq!(status.empty_until_label(), "11:00 AM");
            assert_eq!(status.minutes_to_next_event(now), Some(-15));
            assert_eq!(status.minutes_to_end_of_event(now), Some(30));
        }

        #[test]
        fn occupied_by_overlap_only() {
            let events = vec![event(at(9, 30), 60), event(at(9, 45), 75)];
            let status = RoomStatus::new(&events);

            assert!(!status.has_upcoming_event_today());
            assert_eq!(status.minutes_to_next_event(at(10, 0)), None);
        }

        #[test]
        fn nothing_booked() {
            let status = RoomStatus::new(&[]);
            assert!(status.is_empty());
            assert!(!status.has_upcoming_event_today());
            assert_eq!(status.empty_until_label(), TOMORROW);
            assert_eq!(status.minutes_to_next_event(at(10, 0)), None);
            assert_eq!(status.minutes_to_end_of_event(at(10, 0)), None);
        }
    }

    #[test]
    fn minutes_truncate_toward_zero() {
        let events = vec![event(at(10, 5) + Duration::seconds(30), 30)];
        let status = RoomStatus::new(&events);
        assert_eq!(status.minutes_to_next_event(at(10, 0)), Some(5));
    }

    #[test]
    fn zero_is_distinct_from_none() {
        let events = vec![event(at(10, 0) + Duration::seconds(59), 30)];
        let status = RoomStatus::new(&events);
        assert_eq!(status.minutes_to_next_event(at(10, 0)), Some(0));
    }

    #[test]
    fn all_day_slot_has_no_minutes() {
        let date = refresh_at().date_naive();
        let all_day = DisplayEvent::new(
            "Offsite",
            EventTime::from_date(date),
            EventTime::from_date(date.succ_opt().unwrap()),
            "Ana",
            refresh_at(),
        );
        let events = vec![all_day, event(at(11, 0), 30)];
        let status = RoomStatus::new(&events);

        assert!(!status.is_empty());
        assert_eq!(status.minutes_to_end_of_event(at(10, 0)), None);
        assert_eq!(status.minutes_to_next_event(at(10, 0)), Some(60));
    }

    #[test]
    fn empty_and_upcoming_agree() {
        let lists = [
            vec![],
            vec![event(at(9, 30), 60)],
            vec![event(at(10, 30), 30)],
            vec![event(at(9, 30), 60), event(at(11, 0), 30)],
        ];
        for events in &lists {
            let status = RoomStatus::new(events);
            if events.is_empty() {
                assert!(status.is_empty() && !status.has_upcoming_event_today());
            } else if status.is_empty() {
                assert!(status.has_upcoming_event_today());
            }
        }
    }
}
