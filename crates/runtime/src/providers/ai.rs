use game_core::targeting::{best_candidate, candidates};
use game_core::{Battlefield, EntityId, select_target};

use super::{ActionProvider, Command};

/// AI provider backed by the deterministic target selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetSelectorProvider;

impl TargetSelectorProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ActionProvider for TargetSelectorProvider {
    fn provide_action(&self, entity: EntityId, battlefield: &Battlefield) -> Option<Command> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let scored = candidates(battlefield, entity);
            tracing::debug!(
                "{} evaluated {} candidates, best {:?}",
                entity,
                scored.len(),
                best_candidate(&scored)
            );
        }

        let decision = select_target(battlefield, entity);
        match decision {
            Some(decision) => tracing::debug!(
                "{} selected destination {} targeting {:?}",
                entity,
                decision.destination,
                decision.enemy
            ),
            None => tracing::debug!("{} found no reachable enemy", entity),
        }
        decision.map(Command::from)
    }
}
