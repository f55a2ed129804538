//! Click resolution for human-controlled entities.
use thiserror::Error;

use game_core::{Battlefield, EntityId, GameError, Position, error::ErrorSeverity};

use super::Command;

/// Why a clicked cell did not produce a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("entity {0} is not on the battlefield")]
    UnknownEntity(EntityId),

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("cell {0} is not within movement range")]
    OutOfRange(Position),

    #[error("no reachable cell to strike {0} from")]
    NoAttackCell(EntityId),

    #[error("cell {0} is blocked")]
    Blocked(Position),
}

impl GameError for InputRejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownEntity(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity(_) => "INPUT_UNKNOWN_ENTITY",
            Self::OutOfBounds(_) => "INPUT_OUT_OF_BOUNDS",
            Self::OutOfRange(_) => "INPUT_OUT_OF_RANGE",
            Self::NoAttackCell(_) => "INPUT_NO_ATTACK_CELL",
            Self::Blocked(_) => "INPUT_BLOCKED",
        }
    }
}

/// Turns a clicked cell into a command for the active entity.
///
/// - an enemy and a remote actor: ranged attack in place
/// - an adjacent enemy: attack in place
/// - any other enemy: walk to the nearest attack cell within range, then strike
/// - the actor's own cell: wait
/// - a movable cell within range: walk there
pub fn resolve_click(
    battlefield: &Battlefield,
    entity: EntityId,
    cell: Position,
) -> Result<Command, InputRejection> {
    let actor = battlefield
        .entity(entity)
        .ok_or(InputRejection::UnknownEntity(entity))?;
    let grid = battlefield.grid();
    if !grid.is_valid(cell) {
        return Err(InputRejection::OutOfBounds(cell));
    }
    if cell == actor.position {
        return Ok(Command::Move {
            destination: cell,
            enemy: None,
        });
    }

    let range = actor.attributes.movement_range;
    let offsets = battlefield.config().adjacency.offsets();
    let field = game_core::DistanceField::compute(grid, actor.position);

    let enemy = grid
        .occupant(cell)
        .and_then(|id| battlefield.entity(id))
        .filter(|occupant| occupant.side != actor.side);
    if let Some(enemy) = enemy {
        let adjacent = offsets
            .iter()
            .any(|&(dx, dy)| enemy.position.offset(dx, dy) == actor.position);
        if actor.attributes.is_remote || adjacent {
            return Ok(Command::Attack { enemy: enemy.id });
        }

        let mut best: Option<(Position, u32)> = None;
        for &(dx, dy) in offsets {
            let around = enemy.position.offset(dx, dy);
            if !grid.is_movable(around) {
                continue;
            }
            let Some(distance) = field.distance(around).filter(|&d| d <= range) else {
                continue;
            };
            if best.is_none_or(|(_, shortest)| distance < shortest) {
                best = Some((around, distance));
            }
        }
        return best
            .map(|(destination, _)| Command::Move {
                destination,
                enemy: Some(enemy.id),
            })
            .ok_or(InputRejection::NoAttackCell(enemy.id));
    }

    if !grid.is_movable(cell) {
        return Err(InputRejection::Blocked(cell));
    }
    if !field.within(cell, range) {
        return Err(InputRejection::OutOfRange(cell));
    }
    Ok(Command::Move {
        destination: cell,
        enemy: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        AttributeRecord, CellSpec, GameConfig, MapDimensions, MapLayout, Side, SpawnSpec,
        TerrainKind,
    };
    use std::collections::HashMap;

    fn field(remote: bool) -> Battlefield {
        let record = |remote| AttributeRecord {
            health: 10,
            distance: 2,
            damage: 3,
            attack: 0,
            defense: 0,
            speed: 1,
            remote,
        };
        let table = HashMap::from([
            ("hero".to_string(), record(remote)),
            ("ally".to_string(), record(false)),
            ("foe".to_string(), record(false)),
        ]);
        // row 0: H . . . F
        // row 1: A # . . .
        let layout = MapLayout::new(MapDimensions::new(5, 2))
            .with_cell(CellSpec::new(1, 1, TerrainKind::Obstacle))
            .with_spawn(Side::Ally, SpawnSpec::new("hero", 0, 0))
            .with_spawn(Side::Ally, SpawnSpec::new("ally", 0, 1))
            .with_spawn(Side::Enemy, SpawnSpec::new("foe", 4, 0));
        Battlefield::from_layout(&layout, &table, GameConfig::default()).unwrap()
    }

    const HERO: EntityId = EntityId(0);
    const FOE: EntityId = EntityId(2);

    #[test]
    fn remote_actor_shoots_from_anywhere() {
        let command = resolve_click(&field(true), HERO, Position::new(4, 0)).unwrap();
        assert_eq!(command, Command::Attack { enemy: FOE });
    }

    #[test]
    fn melee_actor_needs_an_attack_cell_within_range() {
        let battlefield = field(false);
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(4, 0)),
            Err(InputRejection::NoAttackCell(FOE))
        );
    }

    #[test]
    fn own_cell_waits_and_open_cells_walk() {
        let battlefield = field(false);
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(0, 0)).unwrap(),
            Command::Move {
                destination: Position::new(0, 0),
                enemy: None
            }
        );
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(2, 0)).unwrap(),
            Command::Move {
                destination: Position::new(2, 0),
                enemy: None
            }
        );
    }

    #[test]
    fn blocked_and_distant_cells_are_rejected() {
        let battlefield = field(false);
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(1, 1)),
            Err(InputRejection::Blocked(Position::new(1, 1)))
        );
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(0, 1)),
            Err(InputRejection::Blocked(Position::new(0, 1)))
        );
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(3, 0)),
            Err(InputRejection::OutOfRange(Position::new(3, 0)))
        );
        assert_eq!(
            resolve_click(&battlefield, HERO, Position::new(9, 0)),
            Err(InputRejection::OutOfBounds(Position::new(9, 0)))
        );
    }

    #[test]
    fn nearby_enemy_is_approached_and_struck() {
        let mut battlefield = field(false);
        assert!(battlefield.set_destination(HERO, Position::new(2, 0), None));
        for _ in 0..1_000 {
            battlefield.update(std::time::Duration::from_millis(16));
        }
        assert_eq!(battlefield.entity(HERO).unwrap().position, Position::new(2, 0));

        let command = resolve_click(&battlefield, HERO, Position::new(4, 0)).unwrap();
        assert_eq!(
            command,
            Command::Move {
                destination: Position::new(3, 0),
                enemy: Some(FOE)
            }
        );
    }
}
