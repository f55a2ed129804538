//! Attribute table loader.

use std::collections::HashMap;
use std::path::Path;

use game_core::AttributeRecord;

use crate::loaders::{LoadResult, read_file};

/// Entity attributes keyed by the name spawn lists refer to.
pub type AttributeTable = HashMap<String, AttributeRecord>;

/// Loader for the attribute table from RON files.
pub struct AttributeLoader;

impl AttributeLoader {
    /// Load the attribute table from a RON map of name to record.
    pub fn load(path: &Path) -> LoadResult<AttributeTable> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<AttributeTable> {
        let table: AttributeTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attributes RON: {}", e))?;

        for (name, record) in &table {
            if record.health <= 0 {
                anyhow::bail!("Attribute '{}' has non-positive health {}", name, record.health);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::AttributeOracle;

    #[test]
    fn records_map_onto_entity_attributes() {
        let table = AttributeLoader::parse(
            r#"{
                "archer": (health: 18, distance: 2, damage: 6, attack: 4, defense: 1, speed: 6, remote: true),
                "knight": (health: 30, distance: 3, damage: 8, attack: 5, defense: 4, speed: 3),
            }"#,
        )
        .unwrap();

        let archer = table.attributes("archer").unwrap();
        assert_eq!(archer.max_health, 18);
        assert_eq!(archer.movement_range, 2);
        assert!(archer.is_remote);

        let knight = table.attributes("knight").unwrap();
        assert_eq!(knight.base_damage, 8);
        assert!(!knight.is_remote);
        assert!(table.attributes("dragon").is_none());
    }

    #[test]
    fn dead_on_arrival_records_are_rejected() {
        let error = AttributeLoader::parse(
            r#"{"ghost": (health: 0, distance: 1, damage: 1, attack: 0, defense: 0, speed: 1)}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("ghost"));
    }
}
