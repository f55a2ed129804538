use std::fmt;

/// Stable identifier for an entity tracked in the [`Roster`](super::Roster).
///
/// Identifiers index the roster arena directly and are never reused within a
/// battlefield, so a stale id simply resolves to nothing once its entity died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance, the admissible heuristic for 4-connected unit steps.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The two opposing sides of a battle. Each side owns exactly one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Ally => Self::Enemy,
            Self::Enemy => Self::Ally,
        }
    }

    /// Index of this side's group inside fixed-size per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::Ally => 0,
            Self::Enemy => 1,
        }
    }
}

/// Sub-cell display coordinate used while an entity animates between cells.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DisplayPosition {
    pub x: f32,
    pub y: f32,
}

impl DisplayPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel centre of a cell for the given cell size.
    pub fn cell_center(position: Position, cell_size: u32) -> Self {
        let size = cell_size as f32;
        Self {
            x: position.x as f32 * size + size / 2.0,
            y: position.y as f32 * size + size / 2.0,
        }
    }

    /// Moves toward `target` by at most `speed`, x axis first, clamping on overshoot.
    pub fn step_toward(&mut self, target: DisplayPosition, speed: f32) {
        if self.x != target.x {
            self.x = approach(self.x, target.x, speed);
        } else if self.y != target.y {
            self.y = approach(self.y, target.y, speed);
        }
    }
}

fn approach(current: f32, target: f32, speed: f32) -> f32 {
    if current < target {
        (current + speed).min(target)
    } else {
        (current - speed).max(target)
    }
}
