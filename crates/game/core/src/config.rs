use std::time::Duration;

use crate::state::Side;

/// Neighbourhood used to decide whether an entity can strike a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Adjacency {
    Four,
    #[default]
    Eight,
}

impl Adjacency {
    const EIGHT: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    const FOUR: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    /// Attack offsets around a target, in evaluation order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &Self::FOUR,
            Self::Eight => &Self::EIGHT,
        }
    }
}

/// Who picks actions for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Controller {
    Human,
    Ai,
}

/// Game rules and timing parameters.
///
/// Every field has a default, so a partial configuration file is valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Pixel edge length of one cell.
    pub cell_size: u32,
    /// Display pixels moved per tick while walking.
    pub move_speed: f32,
    pub frame_interval_ms: u64,
    pub attack_hold_ms: u64,
    /// Level watchdog threshold.
    pub level_time_limit_ms: u64,
    pub banner_duration_ms: u64,
    pub start_level: u32,
    pub max_level: u32,
    pub adjacency: Adjacency,
    pub ally_controller: Controller,
    pub enemy_controller: Controller,
}

impl GameConfig {
    pub const DEFAULT_CELL_SIZE: u32 = 50;
    pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 200;
    pub const DEFAULT_ATTACK_HOLD_MS: u64 = 500;
    pub const DEFAULT_LEVEL_TIME_LIMIT_MS: u64 = 50_000;
    pub const DEFAULT_BANNER_DURATION_MS: u64 = 2_000;
    pub const DEFAULT_START_LEVEL: u32 = 1;
    pub const DEFAULT_MAX_LEVEL: u32 = 2;

    pub fn new() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            attack_hold_ms: Self::DEFAULT_ATTACK_HOLD_MS,
            level_time_limit_ms: Self::DEFAULT_LEVEL_TIME_LIMIT_MS,
            banner_duration_ms: Self::DEFAULT_BANNER_DURATION_MS,
            start_level: Self::DEFAULT_START_LEVEL,
            max_level: Self::DEFAULT_MAX_LEVEL,
            adjacency: Adjacency::default(),
            ally_controller: Controller::Human,
            enemy_controller: Controller::Ai,
        }
    }

    /// Both sides driven by the target selector.
    pub fn autoplay(mut self) -> Self {
        self.ally_controller = Controller::Ai;
        self.enemy_controller = Controller::Ai;
        self
    }

    pub fn controller(&self, side: Side) -> Controller {
        match side {
            Side::Ally => self.ally_controller,
            Side::Enemy => self.enemy_controller,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn attack_hold(&self) -> Duration {
        Duration::from_millis(self.attack_hold_ms)
    }

    pub fn level_time_limit(&self) -> Duration {
        Duration::from_millis(self.level_time_limit_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_duration_ms)
    }

    /// Levels the game cycles through, in play order.
    pub fn levels(&self) -> std::ops::RangeInclusive<u32> {
        self.start_level..=self.max_level
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
