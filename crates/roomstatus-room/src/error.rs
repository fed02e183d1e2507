//! Room error types.

use roomstatus_providers::ProviderError;
use thiserror::Error;

/// Result type for room operations.
pub type RoomResult<T> = Result<T, RoomError>;

/// Errors that can occur while reading a room's status.
#[derive(Debug, Error)]
pub enum RoomError {
    /// The calendar service failed during a cache refresh.
    #[error("failed to refresh events for room {room}")]
    Refresh {
        room: String,
        #[source]
        source: ProviderError,
    },
}

impl RoomError {
    /// Creates a refresh error.
    pub fn refresh(room: impl Into<String>, source: ProviderError) -> Self {
        Self::Refresh {
            room: room.into(),
            source,
        }
    }

    /// Returns true if the next refresh may succeed without intervention.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Refresh { source, .. } => source.is_retryable(),
        }
    }
}
