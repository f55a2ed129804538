//! Content factory for loading game data from a data directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use game_core::{GameConfig, MapLayout};

use crate::loaders::{AttributeLoader, AttributeTable, ConfigLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── attributes.ron
/// └── maps/
///     ├── level_1.ron
///     └── level_2.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the attribute table from `attributes.ron`.
    pub fn load_attributes(&self) -> LoadResult<AttributeTable> {
        AttributeLoader::load(&self.data_dir.join("attributes.ron"))
    }

    /// Load `maps/level_<n>.ron`, falling back to `maps/level_<n>.json`.
    pub fn load_map(&self, level: u32) -> LoadResult<MapLayout> {
        let maps = self.data_dir.join("maps");
        let ron = maps.join(format!("level_{}.ron", level));
        if ron.exists() {
            return MapLoader::load(&ron);
        }
        let json = maps.join(format!("level_{}.json", level));
        if json.exists() {
            return MapLoader::load(&json);
        }
        anyhow::bail!("No map for level {} in {}", level, maps.display())
    }

    /// Load every level in `levels`, keyed by level number.
    pub fn load_maps(
        &self,
        levels: impl IntoIterator<Item = u32>,
    ) -> LoadResult<BTreeMap<u32, MapLayout>> {
        levels
            .into_iter()
            .map(|level| Ok((level, self.load_map(level)?)))
            .collect()
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::MapDimensions;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_complete_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("maps")).unwrap();
        fs::write(dir.path().join("config.toml"), "max_level = 2\n").unwrap();
        fs::write(
            dir.path().join("attributes.ron"),
            r#"{"imp": (health: 5, distance: 1, damage: 1, attack: 0, defense: 0, speed: 1)}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("maps/level_1.ron"),
            "(dimensions: (width: 4, height: 4))",
        )
        .unwrap();
        fs::write(
            dir.path().join("maps/level_2.json"),
            r#"{"dimensions": {"width": 5, "height": 2}}"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        let maps = factory.load_maps(config.levels()).unwrap();
        assert_eq!(maps[&1].dimensions, MapDimensions::new(4, 4));
        assert_eq!(maps[&2].dimensions, MapDimensions::new(5, 2));
        assert!(factory.load_attributes().unwrap().contains_key("imp"));
        assert!(factory.load_map(3).is_err());
    }

    #[test]
    fn missing_config_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_attributes().is_err());
    }
}
