//! Traits describing read-only level data.
//!
//! Oracles expose the validated level layouts and the attribute table that
//! collaborators load from disk. The battlefield only ever reads them, so the
//! core never performs I/O itself.
mod attributes;
mod map;

pub use attributes::{AttributeOracle, AttributeRecord};
pub use map::{CellSpec, MapDimensions, MapLayout, MapOracle, SpawnSpec, TerrainKind};
