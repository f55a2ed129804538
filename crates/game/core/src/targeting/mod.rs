//! Enemy ranking for AI-controlled entities.
//!
//! Every living opponent is scored by how many extra rounds the actor needs
//! to reach a cell from which it can strike, and then by how quickly the
//! strike would kill. Selection is deterministic: identical battlefields
//! always yield the same decision.

use std::cmp::Ordering;

use crate::combat;
use crate::engine::Battlefield;
use crate::pathfinding::{DistanceField, find_path};
use crate::state::{Entity, EntityId, Position};

/// One opponent evaluated for a single selection call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyCandidate {
    pub enemy: EntityId,
    /// Cell to stand on when striking. The actor's own cell when adjacent.
    pub destination: Position,
    pub distance: u32,
    /// Extra full turns before the enemy can be struck.
    pub rounds: u32,
    /// Follow-up strikes needed after the first to kill the enemy.
    pub kill_time: i32,
    pub remote: bool,
}

impl EnemyCandidate {
    /// Ordering where `Less` means "more attractive target".
    pub fn rank(&self, other: &Self) -> Ordering {
        self.rounds.cmp(&other.rounds).then_with(|| {
            if self.rounds == 0 {
                self.kill_time
                    .cmp(&other.kill_time)
                    .then_with(|| other.remote.cmp(&self.remote))
                    .then_with(|| self.distance.cmp(&other.distance))
            } else {
                self.distance.cmp(&other.distance)
            }
        })
    }
}

/// Where the actor goes this turn and whom it strikes on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub destination: Position,
    pub enemy: Option<EntityId>,
}

/// Rounds needed to cover `distance` cells at `range` cells per turn.
pub fn rounds_to_reach(distance: u32, range: u32) -> u32 {
    if distance == 0 {
        0
    } else if range == 0 {
        u32::MAX
    } else {
        (distance - 1) / range
    }
}

/// Scores every living opponent reachable from the actor, in group order.
pub fn candidates(battlefield: &Battlefield, actor: EntityId) -> Vec<EnemyCandidate> {
    let Some(entity) = battlefield.entity(actor) else {
        return Vec::new();
    };
    let field = DistanceField::compute(battlefield.grid(), entity.position);

    battlefield
        .group(entity.side.opponent())
        .members()
        .iter()
        .filter_map(|&id| battlefield.entity(id))
        .filter(|enemy| enemy.is_alive())
        .filter_map(|enemy| evaluate(battlefield, &field, entity, enemy))
        .collect()
}

fn evaluate(
    battlefield: &Battlefield,
    field: &DistanceField,
    actor: &Entity,
    enemy: &Entity,
) -> Option<EnemyCandidate> {
    // Attack cells follow the configured adjacency: eight offsets by default, four when narrowed.
    let offsets = battlefield.config().adjacency.offsets();
    let around = || {
        offsets
            .iter()
            .map(move |&(dx, dy)| enemy.position.offset(dx, dy))
    };

    let (destination, distance) = if around().any(|cell| cell == actor.position) {
        (actor.position, 0)
    } else {
        let grid = battlefield.grid();
        let mut best: Option<(Position, u32)> = None;
        for cell in around().filter(|&cell| grid.is_movable(cell)) {
            let Some(distance) = field.distance(cell) else {
                continue;
            };
            if best.is_none_or(|(_, shortest)| distance < shortest) {
                best = Some((cell, distance));
            }
        }
        best?
    };

    let hurt = combat::hurt(&actor.attributes, &enemy.attributes);
    Some(EnemyCandidate {
        enemy: enemy.id,
        destination,
        distance,
        rounds: rounds_to_reach(distance, actor.attributes.movement_range),
        kill_time: combat::kill_time(enemy.health, hurt),
        remote: enemy.attributes.is_remote,
    })
}

/// Picks the most attractive candidate; earlier candidates win full ties.
pub fn best_candidate(candidates: &[EnemyCandidate]) -> Option<EnemyCandidate> {
    candidates.iter().copied().reduce(|best, candidate| {
        if candidate.rank(&best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

/// Chooses this turn's destination and target for `actor`.
///
/// Returns `None` only when no opponent has a reachable attack cell. A target
/// within reach this round is approached and struck; otherwise the actor
/// walks as far along the route to it as its movement range allows.
pub fn select_target(battlefield: &Battlefield, actor: EntityId) -> Option<Decision> {
    let entity = battlefield.entity(actor)?;
    let best = best_candidate(&candidates(battlefield, actor))?;

    if best.rounds == 0 {
        return Some(Decision {
            destination: best.destination,
            enemy: Some(best.enemy),
        });
    }

    let path = find_path(battlefield.grid(), entity.position, best.destination)?;
    let steps = entity.attributes.movement_range.min(path.distance());
    let destination = path.position_at(steps).unwrap_or(entity.position);
    Some(Decision {
        destination,
        enemy: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(rounds: u32, kill_time: i32, remote: bool, distance: u32) -> EnemyCandidate {
        EnemyCandidate {
            enemy: EntityId(distance),
            destination: Position::ORIGIN,
            distance,
            rounds,
            kill_time,
            remote,
        }
    }

    #[test]
    fn fewer_rounds_beat_everything_else() {
        let near = candidate(0, 9, false, 9);
        let far = candidate(1, 0, true, 1);
        assert_eq!(near.rank(&far), Ordering::Less);
    }

    #[test]
    fn reachable_targets_prefer_quick_kills_then_remote_then_distance() {
        let quick = candidate(0, 1, false, 5);
        let slow = candidate(0, 2, true, 1);
        assert_eq!(quick.rank(&slow), Ordering::Less);

        let remote = candidate(0, 1, true, 5);
        assert_eq!(remote.rank(&quick), Ordering::Less);

        let closer = candidate(0, 1, true, 2);
        assert_eq!(closer.rank(&remote), Ordering::Less);
    }

    #[test]
    fn distant_targets_compare_by_distance_only() {
        let close = candidate(2, 9, false, 7);
        let far = candidate(2, 0, true, 8);
        assert_eq!(close.rank(&far), Ordering::Less);
    }

    #[test]
    fn first_candidate_wins_full_ties() {
        let mut first = candidate(0, 1, false, 3);
        first.enemy = EntityId(10);
        let mut second = first;
        second.enemy = EntityId(11);
        assert_eq!(best_candidate(&[first, second]).map(|c| c.enemy), Some(EntityId(10)));
        assert_eq!(best_candidate(&[]), None);
    }

    #[test]
    fn rounds_to_reach_counts_extra_turns() {
        assert_eq!(rounds_to_reach(0, 3), 0);
        assert_eq!(rounds_to_reach(3, 3), 0);
        assert_eq!(rounds_to_reach(4, 3), 1);
        assert_eq!(rounds_to_reach(7, 3), 2);
        assert_eq!(rounds_to_reach(1, 0), u32::MAX);
    }
}
