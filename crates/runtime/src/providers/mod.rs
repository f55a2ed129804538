//! Sources of entity intent.
//!
//! AI sides plug an [`ActionProvider`] into the level; human sides resolve
//! clicked cells through [`resolve_click`]. Both produce a [`Command`] that the
//! level applies to the battlefield.
mod ai;
mod human;

use game_core::{Battlefield, Decision, EntityId, Position};

pub use ai::TargetSelectorProvider;
pub use human::{InputRejection, resolve_click};

/// What the active entity does this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Walk to `destination`, striking `enemy` on arrival if given.
    Move {
        destination: Position,
        enemy: Option<EntityId>,
    },
    /// Strike from the current cell.
    Attack { enemy: EntityId },
}

impl From<Decision> for Command {
    fn from(decision: Decision) -> Self {
        Command::Move {
            destination: decision.destination,
            enemy: decision.enemy,
        }
    }
}

/// Trait for choosing a command for the active entity.
///
/// Different implementations can handle:
/// - Target-selector AI
/// - Scripted or replayed commands
/// - Testing fixtures
pub trait ActionProvider: Send + Sync {
    /// `None` means the entity forfeits its turn.
    fn provide_action(&self, entity: EntityId, battlefield: &Battlefield) -> Option<Command>;
}

/// Provider that always stays put. Useful as a passive opponent in tests.
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(&self, entity: EntityId, battlefield: &Battlefield) -> Option<Command> {
        let position = battlefield.entity(entity)?.position;
        Some(Command::Move {
            destination: position,
            enemy: None,
        })
    }
}
