//=========================================================================
// Scene Errors
//=========================================================================
//
// Errors raised at the fallible edges of the crate: loading settings and
// sending notifications into the coordinator. Per-frame coordination is
// infallible and degrades by skipping work instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== SceneError ==========================================================

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The coordinator is disabled and no longer listens for events.
    #[error("scene event channel is disconnected")]
    Disconnected,
}

/// Convenience alias used across the crate.
pub type SceneResult<T> = Result<T, SceneError>;
