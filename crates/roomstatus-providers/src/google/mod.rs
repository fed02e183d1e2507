//! Google Calendar service implementation.
//!
//! [`GoogleCalendarService`] lists a room calendar's events with the
//! Calendar API v3:
//!
//! - bearer-token authentication (token supplied by configuration)
//! - recurring events expanded server-side, ordered by start time
//! - pagination up to the requested maximum
//! - HTTP status mapped onto [`ProviderErrorCode`](crate::ProviderErrorCode)
//!
//! # Example
//!
//! ```ignore
//! use roomstatus_providers::google::{GoogleCalendarService, GoogleConfig};
//!
//! let service = GoogleCalendarService::new(GoogleConfig::new(token))?;
//! let events = service.list_events(query).await?;
//! ```

mod client;
mod config;
mod service;

pub use client::GoogleCalendarClient;
pub use config::{DEFAULT_TIMEOUT, GoogleConfig};
pub use service::GoogleCalendarService;
