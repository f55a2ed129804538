//! Battlefield state machine.
//!
//! [`Battlefield`] is the only owner of battle state. Grid occupancy, entity
//! positions, and group membership change exclusively through its methods,
//! which keeps a cell's occupant and that entity's stored position in
//! agreement and removes dead entities exactly once.

mod events;
mod movement;
mod turns;

pub use events::BattleEvent;

use crate::config::GameConfig;
use crate::env::{AttributeOracle, MapLayout};
use crate::pathfinding::DistanceField;
use crate::state::{Entity, EntityId, Grid, Group, InitializationError, Roster, Side};

/// Grid, entities, and turn groups of one level.
#[derive(Clone, Debug)]
pub struct Battlefield {
    grid: Grid,
    roster: Roster,
    groups: [Group; 2],
    config: GameConfig,
    events: Vec<BattleEvent>,
}

impl Battlefield {
    /// Builds the level from a layout, spawning allies first and then enemies.
    pub fn from_layout(
        layout: &MapLayout,
        attributes: &(impl AttributeOracle + ?Sized),
        config: GameConfig,
    ) -> Result<Self, InitializationError> {
        let dimensions = layout.dimensions;
        if dimensions.is_empty() {
            return Err(InitializationError::EmptyDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let (mut grid, rejected) = Grid::with_terrain(dimensions, layout.cells.iter());
        if let Some(spec) = rejected.first() {
            return Err(InitializationError::CellOutOfBounds {
                position: spec.position(),
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let mut roster = Roster::new();
        let mut members: [Vec<(EntityId, i32)>; 2] = [Vec::new(), Vec::new()];
        for side in [Side::Ally, Side::Enemy] {
            for spawn in layout.spawns(side) {
                let stats = attributes.attributes(&spawn.name).ok_or_else(|| {
                    InitializationError::UnknownEntity {
                        name: spawn.name.clone(),
                    }
                })?;
                let position = spawn.resolve(dimensions);
                if !grid.is_valid(position) {
                    return Err(InitializationError::SpawnOutOfBounds {
                        name: spawn.name.clone(),
                        position,
                    });
                }
                if !grid.is_movable(position) {
                    return Err(InitializationError::SpawnBlocked {
                        name: spawn.name.clone(),
                        position,
                    });
                }

                let id = roster.next_id();
                roster.insert(Entity::new(
                    id,
                    spawn.name.as_str(),
                    side,
                    position,
                    stats,
                    config.cell_size,
                ));
                grid.set_occupant(position, Some(id));
                members[side.index()].push((id, stats.speed));
            }
        }

        let [allies, enemies] = members;
        Ok(Self {
            grid,
            roster,
            groups: [Group::new(Side::Ally, allies), Group::new(Side::Enemy, enemies)],
            config,
            events: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.roster.get(id)
    }

    /// Living entities in spawn order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.roster.iter()
    }

    pub fn group(&self, side: Side) -> &Group {
        &self.groups[side.index()]
    }

    /// True once every member of `side` has died.
    pub fn is_defeated(&self, side: Side) -> bool {
        self.group(side).is_empty()
    }

    /// Whether the entity exists and has no action in progress.
    pub fn is_idle(&self, id: EntityId) -> bool {
        self.entity(id).is_some_and(Entity::is_idle)
    }

    /// Distances from the entity's current cell.
    pub fn distance_field(&self, id: EntityId) -> Option<DistanceField> {
        self.entity(id)
            .map(|entity| DistanceField::compute(&self.grid, entity.position))
    }

    /// Events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AttributeRecord, CellSpec, MapDimensions, SpawnSpec, TerrainKind};
    use crate::state::Position;
    use std::collections::HashMap;

    fn table() -> HashMap<String, AttributeRecord> {
        let record = |speed| AttributeRecord {
            health: 10,
            distance: 3,
            damage: 5,
            attack: 1,
            defense: 1,
            speed,
            remote: false,
        };
        HashMap::from([("slow".into(), record(1)), ("fast".into(), record(9))])
    }

    #[test]
    fn spawns_occupy_their_cells_and_sort_groups_by_speed() {
        let layout = MapLayout::new(MapDimensions::new(4, 4))
            .with_spawn(Side::Ally, SpawnSpec::new("slow", 0, 0))
            .with_spawn(Side::Ally, SpawnSpec::new("fast", 1, 0))
            .with_spawn(Side::Enemy, SpawnSpec::new("slow", -1, -1));
        let field = Battlefield::from_layout(&layout, &table(), GameConfig::default()).unwrap();

        assert_eq!(field.grid().occupant(Position::new(0, 0)), Some(EntityId(0)));
        assert_eq!(field.grid().occupant(Position::new(3, 3)), Some(EntityId(2)));
        assert_eq!(field.group(Side::Ally).members(), &[EntityId(1), EntityId(0)]);
        assert_eq!(field.group(Side::Enemy).members(), &[EntityId(2)]);
        for entity in field.entities() {
            assert_eq!(field.grid().occupant(entity.position), Some(entity.id));
        }
    }

    #[test]
    fn malformed_layouts_fail_fast() {
        let table = table();
        let config = GameConfig::default;

        let empty = MapLayout::new(MapDimensions::new(0, 3));
        assert!(matches!(
            Battlefield::from_layout(&empty, &table, config()),
            Err(InitializationError::EmptyDimensions { .. })
        ));

        let stray = MapLayout::new(MapDimensions::new(2, 2))
            .with_cell(CellSpec::new(2, 0, TerrainKind::Obstacle));
        assert!(matches!(
            Battlefield::from_layout(&stray, &table, config()),
            Err(InitializationError::CellOutOfBounds { .. })
        ));

        let unknown = MapLayout::new(MapDimensions::new(2, 2))
            .with_spawn(Side::Enemy, SpawnSpec::new("dragon", 0, 0));
        assert_eq!(
            Battlefield::from_layout(&unknown, &table, config()).unwrap_err(),
            InitializationError::UnknownEntity {
                name: "dragon".into()
            }
        );

        let outside = MapLayout::new(MapDimensions::new(2, 2))
            .with_spawn(Side::Ally, SpawnSpec::new("slow", 5, 0));
        assert!(matches!(
            Battlefield::from_layout(&outside, &table, config()),
            Err(InitializationError::SpawnOutOfBounds { .. })
        ));

        let walled = MapLayout::new(MapDimensions::new(2, 2))
            .with_cell(CellSpec::new(0, 0, TerrainKind::Obstacle))
            .with_spawn(Side::Ally, SpawnSpec::new("slow", 0, 0));
        assert!(matches!(
            Battlefield::from_layout(&walled, &table, config()),
            Err(InitializationError::SpawnBlocked { .. })
        ));

        let stacked = MapLayout::new(MapDimensions::new(2, 2))
            .with_spawn(Side::Ally, SpawnSpec::new("slow", 0, 0))
            .with_spawn(Side::Enemy, SpawnSpec::new("fast", 0, 0));
        assert!(matches!(
            Battlefield::from_layout(&stacked, &table, config()),
            Err(InitializationError::SpawnBlocked { .. })
        ));
    }
}
