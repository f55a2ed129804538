use std::collections::VecDeque;

use crate::state::{Grid, Position, STEP_OFFSETS};

/// Single-source distances over movable cells.
///
/// One breadth-first sweep answers every "how far is X" query the turn loop
/// asks for the active entity: range highlighting, human move checks, and
/// candidate ranking. Distances agree with [`super::find_path`], including
/// its occupied-destination exemption.
#[derive(Clone, Debug)]
pub struct DistanceField {
    source: Position,
    width: usize,
    distances: Vec<Option<u32>>,
    passable: Vec<bool>,
}

impl DistanceField {
    pub fn compute(grid: &Grid, source: Position) -> Self {
        let width = grid.width() as usize;
        let cell_count = grid.dimensions().cell_count();
        let mut distances = vec![None; cell_count];
        let passable = grid
            .cells()
            .map(|(_, cell)| cell.terrain.is_passable())
            .collect();

        let mut queue = VecDeque::new();
        if let Some(index) = grid.index(source) {
            distances[index] = Some(0);
            queue.push_back(source);
        }

        while let Some(current) = queue.pop_front() {
            let Some(current_distance) = grid.index(current).and_then(|index| distances[index])
            else {
                continue;
            };
            for next in grid.neighbors(current) {
                if !grid.is_movable(next) {
                    continue;
                }
                let Some(next_index) = grid.index(next) else {
                    continue;
                };
                if distances[next_index].is_some() {
                    continue;
                }
                distances[next_index] = Some(current_distance + 1);
                queue.push_back(next);
            }
        }

        Self {
            source,
            width,
            distances,
            passable,
        }
    }

    pub fn source(&self) -> Position {
        self.source
    }

    /// Path distance from the source to `position`, or `None` when unreachable.
    ///
    /// Occupied passable cells are not expanded by the sweep; they resolve to
    /// one step past their nearest reached neighbour.
    pub fn distance(&self, position: Position) -> Option<u32> {
        let index = self.index(position)?;
        if let Some(distance) = self.distances[index] {
            return Some(distance);
        }
        if !self.passable[index] {
            return None;
        }
        STEP_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.reached(position.offset(dx, dy)))
            .min()
            .map(|distance| distance + 1)
    }

    /// Whether `position` is reachable in at most `max` steps.
    pub fn within(&self, position: Position, max: u32) -> bool {
        self.distance(position).is_some_and(|distance| distance <= max)
    }

    /// Cells reached by the sweep within `max` steps, source included.
    pub fn reachable(&self, max: u32) -> impl Iterator<Item = Position> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(move |(_, distance)| distance.is_some_and(|d| d <= max))
            .map(|(index, _)| self.position(index))
    }

    fn reached(&self, position: Position) -> Option<u32> {
        self.index(position).and_then(|index| self.distances[index])
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.width == 0 || position.x < 0 || position.y < 0 {
            return None;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width {
            return None;
        }
        let index = y * self.width + x;
        (index < self.distances.len()).then_some(index)
    }

    fn position(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }
}
