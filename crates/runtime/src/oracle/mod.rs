//! Read-only game content shared by every screen.
//!
//! [`ResourceProvider`] bundles the configuration, attribute table, and level
//! layouts behind `Arc`s so screens can build battlefields on demand without
//! global caches. The data is immutable at runtime; dynamic state lives in
//! the [`game_core::Battlefield`] of the running level.
mod map;

use std::sync::Arc;

use game_content::{AttributeTable, ContentFactory};
use game_core::{Battlefield, GameConfig, MapOracle};

use crate::error::{Result, RuntimeError};

pub use map::MapOracleImpl;

#[derive(Clone, Debug)]
pub struct ResourceProvider {
    config: Arc<GameConfig>,
    attributes: Arc<AttributeTable>,
    maps: Arc<MapOracleImpl>,
}

impl ResourceProvider {
    pub fn new(config: GameConfig, attributes: AttributeTable, maps: MapOracleImpl) -> Self {
        Self {
            config: Arc::new(config),
            attributes: Arc::new(attributes),
            maps: Arc::new(maps),
        }
    }

    /// Loads the configuration, the attribute table, and every configured level.
    pub fn load(factory: &ContentFactory) -> Result<Self> {
        let config = factory.load_config()?;
        let attributes = factory.load_attributes()?;
        let maps = MapOracleImpl::new(factory.load_maps(config.levels())?);
        tracing::info!(
            data_dir = %factory.data_dir().display(),
            levels = ?config.levels(),
            entities = attributes.len(),
            "content loaded"
        );
        Ok(Self::new(config, attributes, maps))
    }

    /// Replaces the configuration, keeping the loaded content.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    pub fn maps(&self) -> &MapOracleImpl {
        &self.maps
    }

    /// Builds a fresh battlefield for `level`.
    pub fn battlefield(&self, level: u32) -> Result<Battlefield> {
        let layout = self
            .maps
            .layout(level)
            .ok_or(RuntimeError::MissingMap { level })?;
        Battlefield::from_layout(layout, self.attributes.as_ref(), (*self.config).clone())
            .map_err(|source| RuntimeError::Initialization { level, source })
    }
}
