//! Core types: time, display events, clock, formatting, tracing

pub mod clock;
pub mod event;
pub mod format;
pub mod time;
pub mod tracing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event::{DisplayEvent, PLACEHOLDER};
pub use format::{date_label, minutes_label, time_of_day};
pub use time::{EventTime, TimeWindow, end_of_day};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
