//! Room status entity.
//!
//! A [`Room`] wraps one meeting room's calendar behind a TTL cache and
//! answers the questions a door panel asks:
//!
//! - is the room free right now ([`Room::is_empty`])
//! - is anything else booked today ([`Room::has_upcoming_event_today`])
//! - free until when ([`Room::empty_until_label`])
//! - minutes until the next booking starts or the current one ends
//!
//! ```ignore
//! use std::sync::Arc;
//! use roomstatus_core::SystemClock;
//! use roomstatus_room::{Room, RoomConfig, RoomSettings};
//!
//! let room = Room::new(
//!     RoomConfig::new("Boardroom", "board@example.com"),
//!     RoomSettings::default(),
//!     service,
//!     Arc::new(SystemClock),
//! );
//! let snapshot = room.snapshot().await?;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod room;
pub mod snapshot;
pub mod status;
pub mod transform;

pub use cache::EventCache;
pub use config::{DEFAULT_CACHE_TTL, DEFAULT_MAX_RESULTS, Rgb, RoomConfig, RoomSettings};
pub use error::{RoomError, RoomResult};
pub use room::Room;
pub use snapshot::RoomSnapshot;
pub use status::{RoomStatus, TOMORROW};
pub use transform::{to_display_event, to_display_events};
