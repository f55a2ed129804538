//! Combat resolution.
//!
//! Pure functions over [`Attributes`](crate::state::Attributes); the
//! battlefield applies the results to entity health.
pub mod damage;

pub use damage::{hurt, kill_time};
