//! Level layouts served through [`game_core::MapOracle`].
use std::collections::BTreeMap;

use game_core::{MapLayout, MapOracle};

/// MapOracle implementation holding one immutable layout per level.
#[derive(Clone, Debug, Default)]
pub struct MapOracleImpl {
    layouts: BTreeMap<u32, MapLayout>,
}

impl MapOracleImpl {
    pub fn new(layouts: BTreeMap<u32, MapLayout>) -> Self {
        Self { layouts }
    }

    pub fn with_level(mut self, level: u32, layout: MapLayout) -> Self {
        self.layouts.insert(level, layout);
        self
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.layouts.keys().copied()
    }
}

impl MapOracle for MapOracleImpl {
    fn layout(&self, level: u32) -> Option<&MapLayout> {
        self.layouts.get(&level)
    }
}
