//! Battlefield initialization errors.
//!
//! Layouts and attribute tables are validated by the content layer, so these
//! errors indicate malformed input that should fail fast at level load.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised while building a battlefield from a level layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Layout declares a zero-sized grid.
    #[error("grid dimensions {width}x{height} are empty")]
    EmptyDimensions { width: u32, height: u32 },

    /// Terrain override lies outside the grid.
    #[error("cell {position} is outside the {width}x{height} grid")]
    CellOutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// Spawn names an entity missing from the attribute table.
    #[error("no attributes for entity '{name}'")]
    UnknownEntity { name: String },

    /// Spawn resolves to a cell outside the grid.
    #[error("spawn '{name}' at {position} is outside the grid")]
    SpawnOutOfBounds { name: String, position: Position },

    /// Spawn resolves to an obstacle or an already occupied cell.
    #[error("spawn '{name}' at {position} is blocked")]
    SpawnBlocked { name: String, position: Position },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            EmptyDimensions { .. } => "INIT_EMPTY_DIMENSIONS",
            CellOutOfBounds { .. } => "INIT_CELL_OUT_OF_BOUNDS",
            UnknownEntity { .. } => "INIT_UNKNOWN_ENTITY",
            SpawnOutOfBounds { .. } => "INIT_SPAWN_OUT_OF_BOUNDS",
            SpawnBlocked { .. } => "INIT_SPAWN_BLOCKED",
        }
    }
}
