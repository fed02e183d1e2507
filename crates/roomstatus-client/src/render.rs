//! Text and JSON rendering of room snapshots.

use roomstatus_core::{DisplayEvent, minutes_label};
use roomstatus_room::RoomSnapshot;

use crate::error::ClientResult;

/// Renders one room as a short human-readable block.
///
/// ```text
/// Boardroom: occupied
///   now:  Workshop (Ana) 9:30 AM - 10:30 AM, ends in 30 min
///   next: Retro (Bo) 11:00 AM - 11:30 AM, starts in 1h
/// ```
pub fn render_text(snapshot: &RoomSnapshot) -> String {
    let mut out = if snapshot.is_empty {
        format!("{}: free until {}\n", snapshot.name, snapshot.empty_until)
    } else {
        format!("{}: occupied\n", snapshot.name)
    };

    if let Some(current) = snapshot.current_event() {
        out.push_str(&format!(
            "  now:  {}, ends in {}\n",
            describe(current),
            minutes_label(snapshot.minutes_to_end_of_event)
        ));
    }

    if let Some(next) = snapshot.next_event() {
        out.push_str(&format!(
            "  next: {}, starts in {}\n",
            describe(next),
            minutes_label(snapshot.minutes_to_next_event)
        ));
    }

    out
}

fn describe(event: &DisplayEvent) -> String {
    format!(
        "{} ({}) {} - {}",
        event.summary, event.organizer, event.start_time_display, event.end_time_display
    )
}

/// Renders snapshots as a pretty-printed JSON array.
pub fn render_json(snapshots: &[RoomSnapshot]) -> ClientResult<String> {
    Ok(serde_json::to_string_pretty(snapshots)?)
}
