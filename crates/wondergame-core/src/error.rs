//! Error handling for WonderGame core types.
//!
//! Room file I/O is the only fallible surface at this layer. Errors use
//! `thiserror` so callers can match on the failure kind; the editor and
//! front-ends wrap them with `anyhow` context where a path or room name
//! is worth attaching.

use thiserror::Error;

/// Errors raised while reading or writing a room document.
#[derive(Error, Debug)]
pub enum RoomError {
    /// Filesystem failure while reading or writing the room file.
    #[error("room file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The room file exists but does not parse as a room document.
    #[error("room file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result alias for room document operations.
pub type Result<T> = std::result::Result<T, RoomError>;
