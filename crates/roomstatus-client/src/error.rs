//! Client error types.

use std::io;

use roomstatus_providers::ProviderError;
use roomstatus_room::RoomError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calendar service could not be set up.
    #[error("calendar service error: {0}")]
    Provider(#[from] ProviderError),

    /// A room failed to report its status.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// No configured room has the requested name.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// One or more rooms failed while printing status.
    #[error("{failed} of {total} rooms failed to refresh")]
    RoomsFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
