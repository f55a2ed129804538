//! Shortest-path queries on the battle grid.
//!
//! Movement is 4-connected with unit step cost. [`find_path`] runs A* for a
//! single route; [`DistanceField`] answers many distance queries from one
//! source with a single sweep.
mod astar;
mod field;
mod path;

pub use astar::{distance_within, find_path, path_distance};
pub use field::DistanceField;
pub use path::{Path, PathNode};
