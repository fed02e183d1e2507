//! CalendarService trait and implementations.
//!
//! This crate is the seam between a room and the backend holding its
//! bookings:
//!
//! - [`CalendarService`] - the trait every backend implements
//! - [`RawEvent`] - backend-agnostic event data, before display mapping
//! - [`ProviderError`] - error type for service calls
//! - [`StaticService`] - in-memory/JSON-file service
//! - `google::GoogleCalendarService` - Google Calendar API v3 (feature `google`)
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │  Google API     │    │  events.json    │
//! └────────┬────────┘    └────────┬────────┘
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │ GoogleCalendar  │    │  StaticService  │
//! │ Service         │    │                 │
//! └────────┬────────┘    └────────┬────────┘
//!          │   CalendarService    │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │  RawEvent   │
//!              └─────────────┘
//! ```

pub mod error;
#[cfg(feature = "google")]
pub mod google;
pub mod provider;
pub mod raw_event;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use provider::{
    BoxFuture, CalendarService, ErrorService, EventQuery, OrderBy, StaticService,
};
pub use raw_event::{RawAttendee, RawEvent, RawEventTime, RawOrganizer, ResponseStatus};
