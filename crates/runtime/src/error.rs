//! Unified error type surfaced by the runtime.
//!
//! Wraps content loading and battlefield initialization failures so clients
//! can bubble them up with consistent context.
use thiserror::Error;

use game_core::{GameError, InitializationError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no map loaded for level {level}")]
    MissingMap { level: u32 },

    #[error("failed to initialize level {level}")]
    Initialization {
        level: u32,
        #[source]
        source: InitializationError,
    },

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// Stable code for logs, delegating to the core error where there is one.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingMap { .. } => "RUNTIME_MISSING_MAP",
            Self::Initialization { source, .. } => source.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
