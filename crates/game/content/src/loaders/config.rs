//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.cell_size == 0 {
            anyhow::bail!("cell_size must be positive");
        }
        if !(config.move_speed.is_finite() && config.move_speed > 0.0) {
            anyhow::bail!("move_speed must be a positive number, got {}", config.move_speed);
        }
        if config.start_level > config.max_level {
            anyhow::bail!(
                "start_level {} exceeds max_level {}",
                config.start_level,
                config.max_level
            );
        }
        Ok(config)
    }
}
