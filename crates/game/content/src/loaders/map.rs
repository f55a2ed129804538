//! Level layout loader.
//!
//! A layout holds the grid dimensions, the non-empty cells, and the spawn
//! lists for both sides. RON is the native format; `.json` files are parsed
//! as JSON with the same field names.

use std::path::Path;

use game_core::MapLayout;

use crate::loaders::{LoadResult, read_file};

/// Loader for level layouts.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout, choosing the parser from the file extension.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let layout = if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_ron(&content)
        };
        layout.map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse_ron(content: &str) -> LoadResult<MapLayout> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))
    }

    pub fn parse_json(content: &str) -> LoadResult<MapLayout> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CellSpec, MapDimensions, Side, SpawnSpec, TerrainKind};
    use std::io::Write;

    #[test]
    fn ron_and_json_describe_the_same_layout() {
        let ron = r#"(
            dimensions: (width: 6, height: 4),
            cells: [(x: 2, y: 1, type: Obstacle), (x: 3, y: 1, type: Decoration)],
            allies: [(name: "knight", x: 0, y: 0)],
            enemies: [(name: "goblin", x: -1, y: -1)],
        )"#;
        let json = r#"{
            "dimensions": {"width": 6, "height": 4},
            "cells": [
                {"x": 2, "y": 1, "type": "Obstacle"},
                {"x": 3, "y": 1, "type": "Decoration"}
            ],
            "allies": [{"name": "knight", "x": 0, "y": 0}],
            "enemies": [{"name": "goblin", "x": -1, "y": -1}]
        }"#;

        let expected = MapLayout::new(MapDimensions::new(6, 4))
            .with_cell(CellSpec::new(2, 1, TerrainKind::Obstacle))
            .with_cell(CellSpec::new(3, 1, TerrainKind::Decoration))
            .with_spawn(Side::Ally, SpawnSpec::new("knight", 0, 0))
            .with_spawn(Side::Enemy, SpawnSpec::new("goblin", -1, -1));

        assert_eq!(MapLoader::parse_ron(ron).unwrap(), expected);
        assert_eq!(MapLoader::parse_json(json).unwrap(), expected);
    }

    #[test]
    fn omitted_sections_fall_back_to_defaults() {
        let layout = MapLoader::parse_ron("(enemies: [(name: \"imp\", x: 1, y: 1)])").unwrap();
        assert_eq!(layout.dimensions, MapDimensions::DEFAULT);
        assert!(layout.cells.is_empty());
        assert!(layout.allies.is_empty());
        assert_eq!(layout.enemies.len(), 1);
    }

    #[test]
    fn load_picks_parser_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"dimensions": {{"width": 3, "height": 3}}}}"#).unwrap();
        let layout = MapLoader::load(file.path()).unwrap();
        assert_eq!(layout.dimensions, MapDimensions::new(3, 3));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(file, "(dimensions: oops)").unwrap();
        let error = MapLoader::load(file.path()).unwrap_err().to_string();
        assert!(error.contains("Failed to parse map RON"));
        assert!(error.contains(&file.path().display().to_string()));
    }
}
