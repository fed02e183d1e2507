//! Panel configuration.
//!
//! All settings live in a single `config.toml` at
//! `~/.config/roomstatus/config.toml` by default:
//!
//! ```toml
//! [cache]
//! ttl_secs = 60
//! max_results = 5
//! serve_stale_on_error = false
//!
//! [google]
//! access_token = "env::ROOMSTATUS_GOOGLE_TOKEN"
//! timeout_secs = 30
//!
//! [[rooms]]
//! name = "Boardroom"
//! style_class = "room-large"
//! calendar_id = "board@resource.calendar.google.com"
//! presence_colour = [0, 200, 0]
//! ```
//!
//! `access_token` supports secret references (`pass::…`, `env::…`).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roomstatus_room::{DEFAULT_CACHE_TTL, DEFAULT_MAX_RESULTS, RoomConfig, RoomSettings};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PanelConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the roomstatus panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Cache behaviour shared by every room.
    pub cache: CacheSettings,

    /// Google Calendar settings.
    #[cfg(feature = "google")]
    pub google: Option<GoogleSettings>,

    /// Rooms shown by the panel, in display order.
    pub rooms: Vec<RoomConfig>,
}

/// Cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Seconds a refreshed event list is served.
    pub ttl_secs: u64,

    /// Events requested per refresh.
    pub max_results: usize,

    /// Serve the last good list when a refresh fails.
    pub serve_stale_on_error: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            max_results: DEFAULT_MAX_RESULTS,
            serve_stale_on_error: false,
        }
    }
}

impl CacheSettings {
    /// Converts to room settings.
    pub fn to_room_settings(&self) -> RoomSettings {
        RoomSettings::default()
            .with_cache_ttl(Duration::from_secs(self.ttl_secs))
            .with_max_results(self.max_results)
            .with_serve_stale_on_error(self.serve_stale_on_error)
    }
}

impl PanelConfig {
    /// Loads configuration from the default path, or defaults if it is absent.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roomstatus")
            .join("config.toml")
    }

    /// Finds a room by name.
    pub fn room(&self, name: &str) -> Option<&RoomConfig> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Checks the configuration for values the panel cannot run with.
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.cache.ttl_secs == 0 {
            problems.push("cache.ttl_secs must be greater than zero".to_string());
        }
        if self.cache.max_results == 0 {
            problems.push("cache.max_results must be greater than zero".to_string());
        }

        let mut seen = HashSet::new();
        for (i, room) in self.rooms.iter().enumerate() {
            if room.name.trim().is_empty() {
                problems.push(format!("rooms[{}]: name must not be empty", i));
            } else if !seen.insert(room.name.as_str()) {
                problems.push(format!("rooms[{}]: duplicate room name {:?}", i, room.name));
            }
            if room.calendar_id.trim().is_empty() {
                problems.push(format!("rooms[{}]: calendar_id must not be empty", i));
            }
        }

        #[cfg(feature = "google")]
        if let Some(ref google) = self.google {
            if google.access_token.trim().is_empty() {
                problems.push("google.access_token must not be empty".to_string());
            }
            if google.timeout_secs == 0 {
                problems.push("google.timeout_secs must be greater than zero".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

// ---------------------------------------------------------------------------
// GoogleSettings
// ---------------------------------------------------------------------------

/// Google Calendar service settings.
#[cfg(feature = "google")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSettings {
    /// OAuth access token (supports `pass::` and `env::` prefixes).
    pub access_token: String,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[cfg(feature = "google")]
fn default_timeout_secs() -> u64 {
    roomstatus_providers::google::DEFAULT_TIMEOUT.as_secs()
}

#[cfg(feature = "google")]
impl GoogleSettings {
    /// Converts to service configuration, resolving the token reference.
    pub fn to_service_config(&self) -> Result<roomstatus_providers::google::GoogleConfig, String> {
        use roomstatus_providers::google::GoogleConfig;

        let token = crate::secret::resolve(&self.access_token)
            .map_err(|e| format!("failed to resolve google.access_token: {}", e))?;

        let config =
            GoogleConfig::new(token).with_timeout(Duration::from_secs(self.timeout_secs));
        config.validate()?;
        Ok(config)
    }
}
