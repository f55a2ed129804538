//! Deterministic rules for the tactics arena.
//!
//! `game-core` defines the grid, pathfinding, entity state machine, turn
//! groups, combat math, and target selection, and exposes pure APIs that the
//! runtime drives frame by frame. All battle state mutation flows through
//! [`engine::Battlefield`]; the crate performs no I/O and no logging.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod pathfinding;
pub mod state;
pub mod targeting;

pub use config::{Adjacency, Controller, GameConfig};
pub use engine::{BattleEvent, Battlefield};
pub use env::{
    AttributeOracle, AttributeRecord, CellSpec, MapDimensions, MapLayout, MapOracle, SpawnSpec,
    TerrainKind,
};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::{DistanceField, Path, PathNode, distance_within, find_path, path_distance};
pub use state::{
    Attributes, Cell, DisplayPosition, Entity, EntityId, EntityState, Grid, Group,
    InitializationError, Position, Roster, Side,
};
pub use targeting::{Decision, EnemyCandidate, select_target};
