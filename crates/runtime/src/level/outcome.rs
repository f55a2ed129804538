//! Level end conditions.
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use game_core::{Battlefield, Side};

/// How a level ended, from the ally side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LevelOutcome {
    Win,
    Lose,
}

/// Checked every tick in registration order; the first verdict ends the level.
pub trait VictoryCondition: Send {
    fn evaluate(&mut self, battlefield: &Battlefield, elapsed: Duration) -> Option<LevelOutcome>;

    fn name(&self) -> &'static str;
}

/// Ends the level once either side has no members left.
#[derive(Clone, Copy, Debug, Default)]
pub struct Elimination;

impl VictoryCondition for Elimination {
    fn evaluate(&mut self, battlefield: &Battlefield, _elapsed: Duration) -> Option<LevelOutcome> {
        if battlefield.is_defeated(Side::Enemy) {
            Some(LevelOutcome::Win)
        } else if battlefield.is_defeated(Side::Ally) {
            Some(LevelOutcome::Lose)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "elimination"
    }
}

/// Force-ends a level that runs past its time limit with a coin-flip verdict.
///
/// The coin is seeded, so a given seed always produces the same verdict.
#[derive(Debug)]
pub struct Watchdog {
    limit: Duration,
    rng: StdRng,
}

impl Watchdog {
    pub fn new(limit: Duration, seed: u64) -> Self {
        Self {
            limit,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl VictoryCondition for Watchdog {
    fn evaluate(&mut self, _battlefield: &Battlefield, elapsed: Duration) -> Option<LevelOutcome> {
        if elapsed <= self.limit {
            return None;
        }
        if self.rng.random_bool(0.5) {
            Some(LevelOutcome::Win)
        } else {
            Some(LevelOutcome::Lose)
        }
    }

    fn name(&self) -> &'static str {
        "watchdog"
    }
}
