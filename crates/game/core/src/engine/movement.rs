//! Per-entity Idle / Walk / Attack transitions.

use std::time::Duration;

use crate::combat;
use crate::pathfinding::find_path;
use crate::state::{DisplayPosition, EntityId, EntityState, Position, WalkPlan};

use super::{BattleEvent, Battlefield};

impl Battlefield {
    /// Advances every living entity by one tick.
    pub fn update(&mut self, dt: Duration) {
        for id in self.roster.ids() {
            self.update_entity(id, dt);
        }
    }

    /// Advances one entity by one tick. Dead or unknown ids are ignored.
    pub fn update_entity(&mut self, id: EntityId, dt: Duration) {
        let Some(state) = self.roster.get(id).map(|entity| entity.state) else {
            return;
        };
        match state {
            EntityState::Idle => {
                if let Some(entity) = self.roster.get_mut(id) {
                    entity.animation.frame = 0;
                }
            }
            EntityState::Walk => self.step_walk(id, dt),
            EntityState::Attack => {
                let hold = self.config.attack_hold();
                let Some(entity) = self.roster.get_mut(id) else {
                    return;
                };
                if entity.animation.advance_attack(dt, hold) {
                    entity.state = EntityState::Idle;
                    entity.animation.rest();
                }
            }
        }
    }

    /// Starts walking toward `dest`, striking `enemy` on arrival.
    ///
    /// `dest` must be the entity's own cell or a movable one. When no path
    /// exists but an enemy is given, the entity attacks in place instead.
    /// Returns `false` when the request was rejected and nothing changed.
    pub fn set_destination(
        &mut self,
        id: EntityId,
        dest: Position,
        enemy: Option<EntityId>,
    ) -> bool {
        let Some(entity) = self.roster.get(id) else {
            return false;
        };
        let path = if dest == entity.position || self.grid.is_movable(dest) {
            find_path(&self.grid, entity.position, dest)
        } else {
            None
        };

        match (path, enemy) {
            (Some(path), _) => {
                let target = DisplayPosition::cell_center(dest, self.config.cell_size);
                let Some(entity) = self.roster.get_mut(id) else {
                    return false;
                };
                entity.walk = Some(WalkPlan {
                    path,
                    destination: dest,
                    target,
                    waypoint: entity.display,
                });
                entity.pending_enemy = enemy;
                entity.state = EntityState::Walk;
                entity.animation.rest();
                true
            }
            (None, Some(enemy)) => self.attack(id, enemy),
            (None, None) => false,
        }
    }

    /// Strikes `enemy` from the current cell without moving.
    pub fn attack(&mut self, id: EntityId, enemy: EntityId) -> bool {
        if id == enemy || !self.roster.contains(id) || !self.roster.contains(enemy) {
            return false;
        }
        self.enter_attack(id, enemy);
        true
    }

    fn step_walk(&mut self, id: EntityId, dt: Duration) {
        let speed = self.config.move_speed;
        let interval = self.config.frame_interval();
        let cell_size = self.config.cell_size;

        let Some(entity) = self.roster.get_mut(id) else {
            return;
        };
        let Some(walk) = entity.walk.as_mut() else {
            entity.state = EntityState::Idle;
            entity.animation.rest();
            return;
        };

        if entity.display == walk.target {
            self.finish_walk(id);
            return;
        }

        if entity.display == walk.waypoint {
            walk.waypoint = match walk.path.pop_front() {
                Some(node) => DisplayPosition::cell_center(node.position, cell_size),
                None => walk.target,
            };
        }
        entity.display.step_toward(walk.waypoint, speed);
        entity.animation.advance_walk(dt, interval);
    }

    fn finish_walk(&mut self, id: EntityId) {
        let Some(entity) = self.roster.get_mut(id) else {
            return;
        };
        let Some(walk) = entity.walk.take() else {
            return;
        };
        let from = entity.position;
        let to = walk.destination;
        entity.position = to;
        let pending = entity.pending_enemy.take();

        if self.grid.occupant(from) == Some(id) {
            self.grid.set_occupant(from, None);
        }
        self.grid.set_occupant(to, Some(id));
        self.events.push(BattleEvent::Moved {
            entity: id,
            from,
            to,
        });

        match pending.filter(|&enemy| self.roster.contains(enemy)) {
            Some(enemy) => self.enter_attack(id, enemy),
            None => {
                if let Some(entity) = self.roster.get_mut(id) {
                    entity.state = EntityState::Idle;
                    entity.animation.rest();
                }
            }
        }
    }

    /// Enters Attack and applies the damage immediately.
    fn enter_attack(&mut self, id: EntityId, enemy: EntityId) {
        let Some(attacker) = self.roster.get_mut(id) else {
            return;
        };
        attacker.state = EntityState::Attack;
        attacker.walk = None;
        attacker.pending_enemy = None;
        attacker.animation.rest();
        let attacker_stats = attacker.attributes;

        let Some(target) = self.roster.get_mut(enemy) else {
            return;
        };
        let damage = combat::hurt(&attacker_stats, &target.attributes);
        target.health -= damage;
        let remaining_health = target.health;
        let dead = !target.is_alive();

        self.events.push(BattleEvent::Attacked {
            attacker: id,
            target: enemy,
            damage,
            remaining_health,
        });
        if dead {
            self.kill(enemy);
        }
    }

    /// Removes a dead entity from the roster, the grid, and its group.
    fn kill(&mut self, id: EntityId) {
        let Some(entity) = self.roster.remove(id) else {
            return;
        };
        if self.grid.occupant(entity.position) == Some(id) {
            self.grid.set_occupant(entity.position, None);
        }
        self.groups[entity.side.index()].remove(id);
        self.events.push(BattleEvent::Died {
            entity: id,
            side: entity.side,
        });
    }
}
