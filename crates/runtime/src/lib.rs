//! Runtime orchestration for the tactics arena.
//!
//! This crate drives the deterministic rules in `game-core` frame by frame.
//! Consumers create a [`Game`] from a [`ResourceProvider`], feed it elapsed
//! time and input through [`Game::update`], and render it through a
//! [`Surface`].
//!
//! Modules are organized by responsibility:
//! - [`screen`] hosts the screen state machine
//! - [`level`] runs the turn loop and victory conditions of one level
//! - [`providers`] turns AI decisions and clicks into commands
//! - [`oracle`] bundles read-only content
//! - [`render`] and [`events`] are the boundaries clients observe
pub mod error;
pub mod events;
pub mod level;
pub mod oracle;
pub mod providers;
pub mod render;
pub mod screen;

pub use error::{Result, RuntimeError};
pub use events::GameEvent;
pub use level::{Elimination, Level, LevelOutcome, Phase, RangeHighlight, VictoryCondition, Watchdog};
pub use oracle::{MapOracleImpl, ResourceProvider};
pub use providers::{
    ActionProvider, Command, InputRejection, TargetSelectorProvider, WaitActionProvider,
    resolve_click,
};
pub use render::{CellShade, EntitySprite, Surface};
pub use screen::{FrameInput, Game, MenuCommand, Screen, ScreenKind};
