//! Events recorded while a game runs.
//!
//! Callers drain them once per frame for logging or UI feedback; nothing in
//! the runtime depends on them being observed.
use game_core::{BattleEvent, EntityId, Position, Side};

use crate::level::LevelOutcome;
use crate::screen::ScreenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        level: u32,
        round: u32,
    },
    EntityActivated {
        entity: EntityId,
        side: Side,
    },
    Battle(BattleEvent),
    /// The active entity produced no usable command and lost its turn.
    TurnForfeited {
        entity: EntityId,
    },
    InputRejected {
        entity: EntityId,
        cell: Position,
        reason: String,
    },
    LevelEnded {
        level: u32,
        outcome: LevelOutcome,
    },
    ScreenChanged {
        from: ScreenKind,
        to: ScreenKind,
    },
}

impl From<BattleEvent> for GameEvent {
    fn from(event: BattleEvent) -> Self {
        GameEvent::Battle(event)
    }
}
