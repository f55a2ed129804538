use std::time::Duration;

use crate::pathfinding::Path;

use super::{DisplayPosition, EntityId, Position, Side};

/// Static combat and movement attributes resolved from the attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub max_health: i32,
    /// Cells an entity may walk per turn.
    pub movement_range: u32,
    pub base_damage: i32,
    pub attack: i32,
    pub defense: i32,
    /// Higher speed acts earlier within a round.
    pub speed: i32,
    pub is_remote: bool,
}

/// Per-entity action state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EntityState {
    #[default]
    Idle,
    Walk,
    Attack,
}

/// Two-frame walk cycle plus the attack hold timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Animation {
    pub frame: u8,
    frame_elapsed: Duration,
    attack_elapsed: Duration,
}

impl Animation {
    /// Advances the walk cycle, flipping frames once `interval` is exceeded.
    pub fn advance_walk(&mut self, dt: Duration, interval: Duration) {
        self.frame_elapsed += dt;
        if self.frame_elapsed > interval {
            self.frame = 1 - self.frame.min(1);
            self.frame_elapsed = Duration::ZERO;
        }
    }

    /// Accumulates attack hold time and reports whether `hold` has been exceeded.
    pub fn advance_attack(&mut self, dt: Duration, hold: Duration) -> bool {
        self.attack_elapsed += dt;
        self.attack_elapsed > hold
    }

    pub fn rest(&mut self) {
        self.frame = 0;
        self.frame_elapsed = Duration::ZERO;
        self.attack_elapsed = Duration::ZERO;
    }
}

/// Walk in progress: the remaining path and the pixel targets it feeds.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkPlan {
    pub path: Path,
    pub destination: Position,
    pub(crate) target: DisplayPosition,
    pub(crate) waypoint: DisplayPosition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    /// Attribute-table key this entity was spawned from.
    pub name: String,
    pub side: Side,
    pub position: Position,
    pub display: DisplayPosition,
    pub attributes: Attributes,
    pub health: i32,
    pub state: EntityState,
    pub walk: Option<WalkPlan>,
    /// Enemy to strike once the current walk ends.
    pub pending_enemy: Option<EntityId>,
    pub animation: Animation,
}

impl Entity {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        side: Side,
        position: Position,
        attributes: Attributes,
        cell_size: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            side,
            position,
            display: DisplayPosition::cell_center(position, cell_size),
            attributes,
            health: attributes.max_health,
            state: EntityState::Idle,
            walk: None,
            pending_enemy: None,
            animation: Animation::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_idle(&self) -> bool {
        self.state == EntityState::Idle
    }

    /// Remaining path, if the entity is walking.
    pub fn path(&self) -> Option<&Path> {
        self.walk.as_ref().map(|walk| &walk.path)
    }

    /// Health as a fraction of the maximum, for health bars.
    pub fn health_ratio(&self) -> f32 {
        if self.attributes.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f32 / self.attributes.max_health as f32).min(1.0)
    }
}
