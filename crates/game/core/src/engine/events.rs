use crate::state::{EntityId, Position, Side};

/// State changes recorded by the battlefield for the runtime to observe.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A walk finished and occupancy moved with it.
    Moved {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    Attacked {
        attacker: EntityId,
        target: EntityId,
        damage: i32,
        remaining_health: i32,
    },
    /// The entity left the grid and its group.
    Died { entity: EntityId, side: Side },
}
