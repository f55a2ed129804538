//! Mutable battle state: grid occupancy, entities, and turn groups.
//!
//! Runtime layers read these structures for drawing and decision making but
//! mutate them exclusively through [`crate::engine::Battlefield`].
mod common;
mod entity;
mod error;
mod grid;
mod group;
mod roster;

pub use common::{DisplayPosition, EntityId, Position, Side};
pub use entity::{Animation, Attributes, Entity, EntityState, WalkPlan};
pub use error::InitializationError;
pub use grid::{Cell, Grid, STEP_OFFSETS};
pub use group::Group;
pub use roster::Roster;
