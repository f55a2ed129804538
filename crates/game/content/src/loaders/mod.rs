//! Content loaders for reading game data from files.
//!
//! Each loader converts one RON/JSON/TOML file into the `game-core` type it
//! describes. [`ContentFactory`] knows the data directory layout.

pub mod attributes;
pub mod config;
pub mod factory;
pub mod map;

pub use attributes::{AttributeLoader, AttributeTable};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
