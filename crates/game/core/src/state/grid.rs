use arrayvec::ArrayVec;

use crate::env::{CellSpec, MapDimensions, TerrainKind};

use super::{EntityId, Position};

/// Four-connected step offsets in the order left, up, right, down.
pub const STEP_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// One grid position: static terrain plus a weak link to its occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    pub terrain: TerrainKind,
    pub occupant: Option<EntityId>,
}

impl Cell {
    pub fn is_movable(&self) -> bool {
        self.terrain.is_passable() && self.occupant.is_none()
    }
}

/// Rectangular cell grid stored in row-major order.
///
/// Occupancy is the only mutable part; the battlefield keeps every occupant
/// id in agreement with the entity's stored position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: MapDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::default(); dimensions.cell_count()],
        }
    }

    /// Builds a grid with the given terrain overrides. Specs outside the grid
    /// are returned untouched so the caller can report them.
    pub fn with_terrain<'a>(
        dimensions: MapDimensions,
        specs: impl IntoIterator<Item = &'a CellSpec>,
    ) -> (Self, Vec<CellSpec>) {
        let mut grid = Self::new(dimensions);
        let mut rejected = Vec::new();
        for spec in specs {
            match grid.index(spec.position()) {
                Some(index) => grid.cells[index].terrain = spec.terrain,
                None => rejected.push(*spec),
            }
        }
        (grid, rejected)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn is_valid(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// True when the cell is in bounds, passable, and unoccupied.
    pub fn is_movable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_movable)
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.cell(position).map(|cell| cell.terrain)
    }

    pub fn occupant(&self, position: Position) -> Option<EntityId> {
        self.cell(position).and_then(|cell| cell.occupant)
    }

    /// Overwrites the occupant of a cell without further validation.
    ///
    /// Returns `false` and leaves the grid untouched for out-of-range cells.
    pub fn set_occupant(&mut self, position: Position, occupant: Option<EntityId>) -> bool {
        match self.index(position) {
            Some(index) => {
                self.cells[index].occupant = occupant;
                true
            }
            None => false,
        }
    }

    /// Resolves a pixel coordinate to the cell containing it.
    pub fn pixel_to_cell(px: i32, py: i32, cell_size: u32) -> Position {
        let size = cell_size.max(1) as i32;
        Position::new(px.div_euclid(size), py.div_euclid(size))
    }

    /// In-bounds four-connected neighbours in left, up, right, down order.
    pub fn neighbors(&self, position: Position) -> ArrayVec<Position, 4> {
        STEP_OFFSETS
            .iter()
            .map(|&(dx, dy)| position.offset(dx, dy))
            .filter(|&next| self.is_valid(next))
            .collect()
    }

    /// Iterates every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let width = self.dimensions.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, cell)
        })
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        if !self.is_valid(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}
