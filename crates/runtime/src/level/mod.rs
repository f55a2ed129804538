//! Turn loop of a single level.
//!
//! A [`Level`] cycles through three phases:
//! - `Idle`: pick the next entity to act, or start a new round
//! - `Select`: wait for a command from the entity's controller
//! - `Acting`: let the battlefield animate the command until the entity rests
//!
//! Victory conditions are checked every tick before the phase logic runs.
mod outcome;

use std::time::Duration;

use game_core::{BattleEvent, Battlefield, Controller, EntityId, Grid, Position, Side};

use crate::events::GameEvent;
use crate::providers::{ActionProvider, Command, TargetSelectorProvider, resolve_click};
use crate::render::{CellShade, EntitySprite, Surface};

pub use outcome::{Elimination, LevelOutcome, VictoryCondition, Watchdog};

/// Scheduler state of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Select(EntityId),
    Acting(EntityId),
}

/// Cells the active entity can walk to this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeHighlight {
    pub entity: EntityId,
    /// Cell the entity stands on. Never part of `cells`.
    pub source: Position,
    pub cells: Vec<Position>,
}

impl RangeHighlight {
    fn compute(battlefield: &Battlefield, entity: EntityId) -> Option<Self> {
        let range = battlefield.entity(entity)?.attributes.movement_range;
        let field = battlefield.distance_field(entity)?;
        let source = field.source();
        Some(Self {
            entity,
            source,
            cells: field
                .reachable(range)
                .filter(|&cell| cell != source)
                .collect(),
        })
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }
}

pub struct Level {
    number: u32,
    battlefield: Battlefield,
    phase: Phase,
    highlight: Option<RangeHighlight>,
    conditions: Vec<Box<dyn VictoryCondition>>,
    provider: Box<dyn ActionProvider>,
    elapsed: Duration,
    round: u32,
    outcome: Option<LevelOutcome>,
    events: Vec<GameEvent>,
}

impl Level {
    /// Creates a level with elimination and a watchdog seeded by `seed`.
    pub fn new(number: u32, battlefield: Battlefield, seed: u64) -> Self {
        let limit = battlefield.config().level_time_limit();
        let conditions: Vec<Box<dyn VictoryCondition>> =
            vec![Box::new(Elimination), Box::new(Watchdog::new(limit, seed))];
        tracing::info!(
            level = number,
            allies = battlefield.group(Side::Ally).len(),
            enemies = battlefield.group(Side::Enemy).len(),
            "level started"
        );
        Self {
            number,
            battlefield,
            phase: Phase::Idle,
            highlight: None,
            conditions,
            provider: Box::new(TargetSelectorProvider::new()),
            elapsed: Duration::ZERO,
            round: 1,
            outcome: None,
            events: vec![GameEvent::RoundStarted {
                level: number,
                round: 1,
            }],
        }
    }

    pub fn with_conditions(mut self, conditions: Vec<Box<dyn VictoryCondition>>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Replaces the provider that drives AI-controlled sides.
    pub fn with_provider(mut self, provider: Box<dyn ActionProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Entity currently selecting or acting.
    pub fn active_entity(&self) -> Option<EntityId> {
        match self.phase {
            Phase::Idle => None,
            Phase::Select(id) | Phase::Acting(id) => Some(id),
        }
    }

    pub fn highlight(&self) -> Option<&RangeHighlight> {
        self.highlight.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<LevelOutcome> {
        self.outcome
    }

    /// True while a human-controlled entity waits for a clicked cell.
    pub fn awaiting_input(&self) -> bool {
        match self.phase {
            Phase::Select(id) => self.controller_of(id) == Some(Controller::Human),
            _ => false,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances the level by one tick and reports the outcome once decided.
    pub fn update(&mut self, dt: Duration) -> Option<LevelOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.elapsed += dt;
        self.battlefield.update(dt);
        self.collect_battle_events();

        if let Some(outcome) = self.check_conditions() {
            self.finish(outcome);
            return self.outcome;
        }

        match self.phase {
            Phase::Idle => self.activate_next(),
            Phase::Select(_) => {}
            Phase::Acting(id) => {
                if self.battlefield.entity(id).is_none_or(|entity| entity.is_idle()) {
                    self.phase = Phase::Idle;
                }
            }
        }
        self.outcome
    }

    /// Feeds a clicked cell to the human-controlled active entity.
    ///
    /// Returns `false` when no human is selecting or the cell was rejected.
    pub fn select_cell(&mut self, cell: Position) -> bool {
        let Phase::Select(id) = self.phase else {
            return false;
        };
        if self.controller_of(id) != Some(Controller::Human) || self.outcome.is_some() {
            return false;
        }

        let resolved = resolve_click(&self.battlefield, id, cell);
        match resolved {
            Ok(command) if self.apply(id, command) => true,
            Ok(command) => {
                self.reject(id, cell, format!("{:?} could not start", command));
                false
            }
            Err(rejection) => {
                self.reject(id, cell, rejection.to_string());
                false
            }
        }
    }

    /// Resolves a pointer position to a cell and selects it.
    pub fn select_pixel(&mut self, px: i32, py: i32) -> bool {
        let cell = Grid::pixel_to_cell(px, py, self.battlefield.config().cell_size);
        self.select_cell(cell)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let grid = self.battlefield.grid();
        for (position, cell) in grid.cells() {
            let shade = match &self.highlight {
                Some(highlight) if highlight.source == position => CellShade::Active,
                Some(highlight) if highlight.contains(position) => CellShade::InRange,
                _ => CellShade::Plain,
            };
            surface.draw_cell(position, cell.terrain, shade);
        }
        let active = self.active_entity();
        for entity in self.battlefield.entities() {
            surface.draw_entity(&EntitySprite::new(entity, active == Some(entity.id)));
        }
    }

    fn controller_of(&self, id: EntityId) -> Option<Controller> {
        let side = self.battlefield.entity(id)?.side;
        Some(self.battlefield.config().controller(side))
    }

    fn activate_next(&mut self) {
        let Some(id) = self.battlefield.activate_next() else {
            self.battlefield.next_round();
            self.round += 1;
            tracing::info!(level = self.number, round = self.round, "round started");
            self.events.push(GameEvent::RoundStarted {
                level: self.number,
                round: self.round,
            });
            return;
        };
        let Some(side) = self.battlefield.entity(id).map(|entity| entity.side) else {
            return;
        };

        tracing::debug!("{} ({}) activated in round {}", id, side, self.round);
        self.events.push(GameEvent::EntityActivated { entity: id, side });
        self.highlight = RangeHighlight::compute(&self.battlefield, id);
        self.phase = Phase::Select(id);

        if self.battlefield.config().controller(side) == Controller::Ai {
            let command = self.provider.provide_action(id, &self.battlefield);
            match command {
                Some(command) if self.apply(id, command) => {}
                _ => self.forfeit(id),
            }
        }
    }

    fn apply(&mut self, id: EntityId, command: Command) -> bool {
        let started = match command {
            Command::Move { destination, enemy } => {
                self.battlefield.set_destination(id, destination, enemy)
            }
            Command::Attack { enemy } => self.battlefield.attack(id, enemy),
        };
        if started {
            tracing::debug!("{} executing {:?}", id, command);
            self.highlight = None;
            self.phase = Phase::Acting(id);
        }
        started
    }

    fn forfeit(&mut self, id: EntityId) {
        tracing::warn!("{} has no usable action and forfeits its turn", id);
        self.events.push(GameEvent::TurnForfeited { entity: id });
        self.highlight = None;
        self.phase = Phase::Idle;
    }

    fn reject(&mut self, id: EntityId, cell: Position, reason: String) {
        tracing::warn!("rejected input {} for {}: {}", cell, id, reason);
        self.events.push(GameEvent::InputRejected {
            entity: id,
            cell,
            reason,
        });
    }

    fn collect_battle_events(&mut self) {
        for event in self.battlefield.drain_events() {
            match &event {
                BattleEvent::Moved { entity, from, to } => {
                    tracing::debug!("{} moved {} -> {}", entity, from, to)
                }
                BattleEvent::Attacked {
                    attacker,
                    target,
                    damage,
                    remaining_health,
                } => tracing::debug!(
                    "{} hit {} for {} ({} left)",
                    attacker,
                    target,
                    damage,
                    remaining_health
                ),
                BattleEvent::Died { entity, side } => {
                    tracing::info!("{} ({}) died", entity, side)
                }
            }
            self.events.push(event.into());
        }
    }

    fn check_conditions(&mut self) -> Option<LevelOutcome> {
        for condition in &mut self.conditions {
            if let Some(outcome) = condition.evaluate(&self.battlefield, self.elapsed) {
                tracing::debug!("{} condition decided {}", condition.name(), outcome);
                return Some(outcome);
            }
        }
        None
    }

    fn finish(&mut self, outcome: LevelOutcome) {
        tracing::info!(
            level = self.number,
            %outcome,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "level ended"
        );
        self.outcome = Some(outcome);
        self.highlight = None;
        self.phase = Phase::Idle;
        self.events.push(GameEvent::LevelEnded {
            level: self.number,
            outcome,
        });
    }
}
