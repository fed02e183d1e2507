//! Raw event to display event mapping.

use chrono::{DateTime, FixedOffset};
use roomstatus_core::{DisplayEvent, EventTime, PLACEHOLDER};
use roomstatus_providers::RawEvent;
use tracing::trace;

/// Drops events the room declined and maps the rest for display.
///
/// Only the attendee flagged `self` is consulted, so the querying account
/// should be the room's own resource account (or a delegate whose `self`
/// record stands for the room). Order is preserved. `now` is the refresh
/// instant.
pub fn to_display_events(raw: &[RawEvent], now: DateTime<FixedOffset>) -> Vec<DisplayEvent> {
    raw.iter()
        .filter(|event| {
            let declined = event.is_declined_by_self();
            if declined {
                trace!(event_id = %event.id, "dropping declined event");
            }
            !declined
        })
        .map(|event| to_display_event(event, now))
        .collect()
}

/// Maps one raw event for display.
pub fn to_display_event(raw: &RawEvent, now: DateTime<FixedOffset>) -> DisplayEvent {
    DisplayEvent::new(
        summary(raw),
        EventTime::from(raw.start),
        EventTime::from(raw.end),
        organizer(raw),
        now,
    )
}

fn summary(raw: &RawEvent) -> String {
    if raw.is_private() {
        return PLACEHOLDER.to_string();
    }
    non_blank(raw.summary.as_deref())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn organizer(raw: &RawEvent) -> String {
    let organizer = raw.organizer.as_ref();
    non_blank(organizer.and_then(|o| o.display_name.as_deref()))
        .or_else(|| non_blank(organizer.and_then(|o| o.email.as_deref())))
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
