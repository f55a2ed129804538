//! Headless tactics client.
//!
//! # Architecture
//!
//! ```text
//! Client (fixed-timestep loop)
//!   ├─→ Game (runtime screen machine)
//!   ├─→ InputSource (autopilot or terminal)
//!   └─→ TextSurface (ASCII frames)
//! ```
//!
//! Every frame the client collects input, advances the game by one tick,
//! logs the events the tick produced, and draws the active screen.

mod builder;
pub mod config;
pub mod input;
pub mod surface;

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use input::{AutoPilot, InputSource, StdinInput};
pub use surface::TextSurface;

use anyhow::Result;
use runtime::{Game, GameEvent, LevelOutcome};

/// Counters gathered over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub levels_won: u32,
    pub levels_lost: u32,
    pub rounds: u32,
    pub deaths: u32,
}

pub struct Client {
    game: Game,
    surface: TextSurface,
    input: Box<dyn InputSource>,
    config: ClientConfig,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    /// Runs until the game exits or the frame cap is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if a level cannot be built from the loaded content.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        while !self.game.is_finished() && summary.frames < self.config.max_frames {
            let input = self.input.next_input(&self.game);
            self.game.update(self.config.tick, &input)?;
            for event in self.game.drain_events() {
                self.record(&event, &mut summary);
            }
            self.game.draw(&mut self.surface);
            summary.frames += 1;
        }

        if !self.game.is_finished() {
            tracing::warn!(frames = summary.frames, "frame cap reached before exit");
        }
        tracing::info!(
            frames = summary.frames,
            won = summary.levels_won,
            lost = summary.levels_lost,
            "run finished"
        );
        Ok(summary)
    }

    fn record(&self, event: &GameEvent, summary: &mut RunSummary) {
        match event {
            GameEvent::RoundStarted { .. } => summary.rounds += 1,
            GameEvent::Battle(game_core::BattleEvent::Died { .. }) => summary.deaths += 1,
            GameEvent::LevelEnded { level, outcome } => {
                match outcome {
                    LevelOutcome::Win => summary.levels_won += 1,
                    LevelOutcome::Lose => summary.levels_lost += 1,
                }
                println!("{}\nLevel {}: {}", self.surface.frame(), level, outcome);
            }
            GameEvent::InputRejected { cell, reason, .. } => {
                println!("Cannot act on {}: {}", cell, reason);
            }
            _ => {}
        }
        tracing::debug!(?event, "game event");
    }
}
