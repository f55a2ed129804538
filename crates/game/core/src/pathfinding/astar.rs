use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::state::{Grid, Position};

use super::{Path, PathNode};

/// Finds the shortest 4-connected path from `source` to `dest`.
///
/// The returned path excludes `source` and includes `dest`. Intermediate
/// cells must be movable; `dest` only has to be passable, so a walker can
/// target the cell of the entity it is about to strike.
pub fn find_path(grid: &Grid, source: Position, dest: Position) -> Option<Path> {
    let dest_index = grid.index(dest)?;
    let source_index = grid.index(source)?;
    if source == dest {
        return Some(Path::default());
    }
    if !grid.terrain(dest).is_some_and(|terrain| terrain.is_passable()) {
        return None;
    }

    let cell_count = grid.dimensions().cell_count();
    let mut g_score = vec![u32::MAX; cell_count];
    let mut came_from: Vec<Option<Position>> = vec![None; cell_count];
    let mut open = BinaryHeap::new();
    let mut sequence: u64 = 0;

    g_score[source_index] = 0;
    open.push(Reverse((source.manhattan(dest), sequence, source)));

    while let Some(Reverse((f, _, current))) = open.pop() {
        let Some(current_index) = grid.index(current) else {
            continue;
        };
        let g = g_score[current_index];
        // Superseded by a cheaper entry pushed later.
        if f > g.saturating_add(current.manhattan(dest)) {
            continue;
        }
        if current_index == dest_index {
            return Some(reconstruct(&came_from, &g_score, grid, dest));
        }

        for next in grid.neighbors(current) {
            if next != dest && !grid.is_movable(next) {
                continue;
            }
            let Some(next_index) = grid.index(next) else {
                continue;
            };
            let tentative = g + 1;
            if tentative < g_score[next_index] {
                g_score[next_index] = tentative;
                came_from[next_index] = Some(current);
                sequence += 1;
                open.push(Reverse((tentative + next.manhattan(dest), sequence, next)));
            }
        }
    }

    None
}

fn reconstruct(
    came_from: &[Option<Position>],
    g_score: &[u32],
    grid: &Grid,
    dest: Position,
) -> Path {
    let mut nodes = VecDeque::new();
    let mut cursor = Some(dest);
    while let Some(position) = cursor {
        let Some(index) = grid.index(position) else {
            break;
        };
        let Some(previous) = came_from[index] else {
            // Reached the source, which the path excludes.
            break;
        };
        nodes.push_front(PathNode {
            position,
            distance: g_score[index],
        });
        cursor = Some(previous);
    }
    Path::from_nodes(nodes)
}

/// Path distance between two cells, or `None` when unreachable.
pub fn path_distance(grid: &Grid, source: Position, dest: Position) -> Option<u32> {
    find_path(grid, source, dest).map(|path| path.distance())
}

/// Whether `dest` can be reached from `source` in at most `max` steps.
pub fn distance_within(grid: &Grid, source: Position, dest: Position, max: u32) -> bool {
    path_distance(grid, source, dest).is_some_and(|distance| distance <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CellSpec, MapDimensions, TerrainKind};
    use crate::state::EntityId;

    fn grid_with(width: u32, height: u32, obstacles: &[(i32, i32)]) -> Grid {
        let specs: Vec<_> = obstacles
            .iter()
            .map(|&(x, y)| CellSpec::new(x, y, TerrainKind::Obstacle))
            .collect();
        Grid::with_terrain(MapDimensions::new(width, height), specs.iter()).0
    }

    #[test]
    fn same_cell_is_an_empty_path() {
        let grid = grid_with(3, 3, &[]);
        let path = find_path(&grid, Position::new(1, 1), Position::new(1, 1)).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.distance(), 0);
    }

    #[test]
    fn path_excludes_source_and_includes_destination() {
        let grid = grid_with(4, 1, &[]);
        let path = find_path(&grid, Position::new(0, 0), Position::new(3, 0)).unwrap();
        let cells: Vec<_> = path.nodes().map(|n| (n.position.x, n.distance)).collect();
        assert_eq!(cells, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn detours_around_a_wall() {
        // . # .
        // . # .
        // . . .
        let grid = grid_with(3, 3, &[(1, 0), (1, 1)]);
        let path = find_path(&grid, Position::new(0, 0), Position::new(2, 0)).unwrap();
        assert_eq!(path.distance(), 6);
        assert!(path.nodes().all(|n| n.position.x != 1 || n.position.y == 2));
    }

    #[test]
    fn sealed_destination_has_no_path() {
        let grid = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        assert!(find_path(&grid, Position::new(0, 0), Position::new(2, 2)).is_none());
        assert!(!distance_within(&grid, Position::new(0, 0), Position::new(2, 2), 100));
    }

    #[test]
    fn obstacle_destination_is_unreachable() {
        let grid = grid_with(3, 3, &[(2, 2)]);
        assert!(find_path(&grid, Position::new(0, 0), Position::new(2, 2)).is_none());
    }

    #[test]
    fn occupied_destination_is_exempt_but_occupied_transit_is_not() {
        let mut grid = grid_with(3, 1, &[]);
        grid.set_occupant(Position::new(2, 0), Some(EntityId(1)));
        assert_eq!(
            path_distance(&grid, Position::new(0, 0), Position::new(2, 0)),
            Some(2)
        );

        grid.set_occupant(Position::new(1, 0), Some(EntityId(2)));
        assert_eq!(path_distance(&grid, Position::new(0, 0), Position::new(2, 0)), None);
    }

    #[test]
    fn invalid_endpoints_have_no_path() {
        let grid = grid_with(3, 3, &[]);
        assert!(find_path(&grid, Position::new(-1, 0), Position::new(1, 1)).is_none());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(3, 0)).is_none());
    }

    #[test]
    fn distance_within_compares_inclusively() {
        let grid = grid_with(5, 5, &[]);
        let (a, b) = (Position::new(0, 0), Position::new(2, 1));
        assert!(distance_within(&grid, a, b, 3));
        assert!(!distance_within(&grid, a, b, 2));
    }
}
