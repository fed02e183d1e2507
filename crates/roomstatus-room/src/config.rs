//! Room identity and cache settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time-to-live of a room's event cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Default number of events requested per refresh.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// An RGB display tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Returns the colour as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Static identity of a room. Immutable for the lifetime of a [`Room`](crate::Room).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Display label.
    pub name: String,
    /// Styling token passed through to rendering.
    #[serde(default)]
    pub style_class: String,
    /// Identifier handed to the calendar service.
    pub calendar_id: String,
    #[serde(default)]
    pub presence_colour: Rgb,
}

impl RoomConfig {
    pub fn new(name: impl Into<String>, calendar_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style_class: String::new(),
            calendar_id: calendar_id.into(),
            presence_colour: Rgb::default(),
        }
    }

    pub fn with_style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = style_class.into();
        self
    }

    pub fn with_presence_colour(mut self, colour: Rgb) -> Self {
        self.presence_colour = colour;
        self
    }
}

/// Cache behaviour shared by rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSettings {
    /// How long a refreshed event list is served before the next refresh.
    pub cache_ttl: Duration,
    /// Maximum events requested per refresh.
    pub max_results: usize,
    /// Serve the previous list when a refresh fails instead of erroring.
    pub serve_stale_on_error: bool,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            max_results: DEFAULT_MAX_RESULTS,
            serve_stale_on_error: false,
        }
    }
}

impl RoomSettings {
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_serve_stale_on_error(mut self, enabled: bool) -> Self {
        self.serve_stale_on_error = enabled;
        self
    }
}
