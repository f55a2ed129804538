use crate::state::{Position, Side};

/// Static level oracle exposing the validated layout for a given level number.
pub trait MapOracle: Send + Sync {
    fn layout(&self, level: u32) -> Option<&MapLayout>;

    fn contains_level(&self, level: u32) -> bool {
        self.layout(level).is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    /// Grid size used when a layout does not declare its own.
    pub const DEFAULT: Self = Self::new(10, 12);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for MapDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Canonical terrain classes for grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Empty,
    Obstacle,
    /// Drawn differently but walkable.
    Decoration,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TerrainKind::Obstacle)
    }
}

/// Non-empty cell declared by a level layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSpec {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub terrain: TerrainKind,
}

impl CellSpec {
    pub const fn new(x: i32, y: i32, terrain: TerrainKind) -> Self {
        Self { x, y, terrain }
    }

    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Blueprint for an entity that exists when the level starts.
///
/// Negative coordinates count from the far edge of the grid, so `x: -1`
/// names the last column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl SpawnSpec {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Resolves edge-relative coordinates against the grid dimensions.
    pub fn resolve(&self, dimensions: MapDimensions) -> Position {
        let resolve_axis = |value: i32, length: u32| {
            if value < 0 {
                length as i32 + value
            } else {
                value
            }
        };
        Position::new(
            resolve_axis(self.x, dimensions.width),
            resolve_axis(self.y, dimensions.height),
        )
    }
}

/// Validated description of one level: terrain overrides and per-side spawns.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLayout {
    #[cfg_attr(feature = "serde", serde(default))]
    pub dimensions: MapDimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cells: Vec<CellSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allies: Vec<SpawnSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<SpawnSpec>,
}

impl MapLayout {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub fn with_cell(mut self, cell: CellSpec) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn with_spawn(mut self, side: Side, spawn: SpawnSpec) -> Self {
        match side {
            Side::Ally => self.allies.push(spawn),
            Side::Enemy => self.enemies.push(spawn),
        }
        self
    }

    pub fn spawns(&self, side: Side) -> &[SpawnSpec] {
        match side {
            Side::Ally => &self.allies,
            Side::Enemy => &self.enemies,
        }
    }
}
