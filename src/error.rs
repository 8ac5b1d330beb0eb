//! Error types for the player

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The page-wide audio element could not be found or created
    #[error("Audio element unavailable")]
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    AudioElementUnavailable,

    /// The browser refused to start playback (autoplay policy, missing file, decode error)
    #[error("Playback rejected: {0}")]
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    PlaybackRejected(String),

    /// Embedded player configuration did not parse
    #[error("Invalid player settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// Track id is not part of the playlist
    #[error("Unknown track: {0}")]
    UnknownTrack(u32),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
