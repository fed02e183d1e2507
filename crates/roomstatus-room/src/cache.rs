//! Per-room event cache with TTL.
//!
//! The cache is a single `{ expires_at, events }` value. A refresh replaces
//! it wholesale; a failed refresh leaves it as it was.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use roomstatus_core::DisplayEvent;
use tracing::trace;

/// The cached, display-ready event list of one room.
#[derive(Debug, Clone)]
pub struct EventCache {
    /// Instant from which the list must be refreshed.
    expires_at: DateTime<FixedOffset>,
    /// Events sorted by start ascending.
    events: Arc<Vec<DisplayEvent>>,
    /// When the list was last refreshed, `None` until the first refresh.
    refreshed_at: Option<DateTime<FixedOffset>>,
}

impl EventCache {
    /// Creates an empty cache that is already expired at `now`.
    pub fn expired_at(now: DateTime<FixedOffset>) -> Self {
        Self {
            expires_at: now,
            events: Arc::new(Vec::new()),
            refreshed_at: None,
        }
    }

    /// Returns true if the list must be refreshed before it is read at `now`.
    pub fn is_expired(&self, now: DateTime<FixedOffset>) -> bool {
        now >= self.expires_at
    }

    /// Replaces the list and re-arms the timer for `ttl` after `now`.
    pub fn replace(
        &mut self,
        events: Vec<DisplayEvent>,
        now: DateTime<FixedOffset>,
        ttl: Duration,
    ) {
        // Saturates: a TTL past chrono's range never expires.
        self.expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or_else(|| DateTime::<Utc>::MAX_UTC.fixed_offset());
        self.events = Arc::new(events);
        self.refreshed_at = Some(now);
        trace!(expires_at = %self.expires_at, count = self.events.len(), "cache replaced");
    }

    /// Returns the cached list.
    pub fn events(&self) -> Arc<Vec<DisplayEvent>> {
        Arc::clone(&self.events)
    }

    pub fn expires_at(&self) -> DateTime<FixedOffset> {
        self.expires_at
    }

    pub fn refreshed_at(&self) -> Option<DateTime<FixedOffset>> {
        self.refreshed_at
    }

    /// Returns true once at least one refresh succeeded.
    pub fn has_data(&self) -> bool {
        self.refreshed_at.is_some()
    }
}
