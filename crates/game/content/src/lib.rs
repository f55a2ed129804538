//! Data-driven content loaders.
//!
//! This crate turns files from a data directory into `game-core` types:
//! - Level layouts: terrain overrides and per-side spawns (RON or JSON)
//! - Attribute table keyed by entity name (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by the runtime's resource provider and never mutated.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttributeLoader, AttributeTable, ConfigLoader, ContentFactory, LoadResult, MapLoader,
};
