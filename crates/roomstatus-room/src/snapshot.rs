//! Point-in-time view of a room.

use chrono::{DateTime, FixedOffset, Utc};
use roomstatus_core::DisplayEvent;
use serde::{Deserialize, Serialize};

use crate::config::{Rgb, RoomConfig};
use crate::status::RoomStatus;

/// Every derived field of a room, evaluated against one event list at one
/// instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub style_class: String,
    pub presence_colour: Rgb,
    pub events: Vec<DisplayEvent>,
    pub is_empty: bool,
    pub has_upcoming_event_today: bool,
    pub empty_until: String,
    pub minutes_to_next_event: Option<i64>,
    pub minutes_to_end_of_event: Option<i64>,
    pub generated_at: DateTime<FixedOffset>,
}

impl RoomSnapshot {
    /// Evaluates every query over `events` at `now`.
    pub fn build(
        config: &RoomConfig,
        events: &[DisplayEvent],
        now: DateTime<FixedOffset>,
    ) -> Self {
        let status = RoomStatus::new(events);
        let instant = now.with_timezone(&Utc);
        Self {
            name: config.name.clone(),
            style_class: config.style_class.clone(),
            presence_colour: config.presence_colour,
            events: events.to_vec(),
            is_empty: status.is_empty(),
            has_upcoming_event_today: status.has_upcoming_event_today(),
            empty_until: status.empty_until_label().to_string(),
            minutes_to_next_event: status.minutes_to_next_event(instant),
            minutes_to_end_of_event: status.minutes_to_end_of_event(instant),
            generated_at: now,
        }
    }

    /// Returns the event in progress, if any.
    pub fn current_event(&self) -> Option<&DisplayEvent> {
        self.events.iter().find(|e| e.is_now)
    }

    /// Returns the event `minutes_to_next_event` refers to.
    pub fn next_event(&self) -> Option<&DisplayEvent> {
        RoomStatus::new(&self.events).next_slot()
    }
}
