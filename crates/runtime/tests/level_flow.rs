use std::collections::HashMap;
use std::time::Duration;

use game_core::{
    AttributeRecord, CellSpec, EntityId, GameConfig, MapDimensions, MapLayout, Position, Side,
    SpawnSpec, TerrainKind,
};
use runtime::{
    GameEvent, Level, LevelOutcome, MapOracleImpl, ResourceProvider, VictoryCondition,
    WaitActionProvider, Watchdog,
};

const TICK: Duration = Duration::from_millis(16);

fn attributes() -> HashMap<String, AttributeRecord> {
    HashMap::from([
        (
            "knight".to_string(),
            AttributeRecord {
                health: 30,
                distance: 3,
                damage: 50,
                attack: 5,
                defense: 5,
                speed: 9,
                remote: false,
            },
        ),
        (
            "imp".to_string(),
            AttributeRecord {
                health: 5,
                distance: 1,
                damage: 1,
                attack: 0,
                defense: 0,
                speed: 1,
                remote: false,
            },
        ),
    ])
}

fn level(layout: MapLayout, config: GameConfig, seed: u64) -> Level {
    let resources = ResourceProvider::new(
        config,
        attributes(),
        MapOracleImpl::default().with_level(1, layout),
    );
    Level::new(1, resources.battlefield(1).unwrap(), seed)
}

fn run(level: &mut Level, max_ticks: usize) -> (Option<LevelOutcome>, Vec<GameEvent>) {
    let mut events = Vec::new();
    for _ in 0..max_ticks {
        let outcome = level.update(TICK);
        events.extend(level.drain_events());
        if outcome.is_some() {
            return (outcome, events);
        }
    }
    (None, events)
}

fn duel(ally: &str, enemy: &str) -> MapLayout {
    MapLayout::new(MapDimensions::new(6, 6))
        .with_spawn(Side::Ally, SpawnSpec::new(ally, 1, 1))
        .with_spawn(Side::Enemy, SpawnSpec::new(enemy, 4, 1))
}

#[test]
fn allies_win_once_every_enemy_is_dead() {
    let mut level = level(duel("knight", "imp"), GameConfig::default().autoplay(), 0);
    let (outcome, events) = run(&mut level, 2_000);

    assert_eq!(outcome, Some(LevelOutcome::Win));
    assert!(events.contains(&GameEvent::Battle(game_core::BattleEvent::Died {
        entity: EntityId(1),
        side: Side::Enemy,
    })));
    assert_eq!(
        events.last(),
        Some(&GameEvent::LevelEnded {
            level: 1,
            outcome: LevelOutcome::Win
        })
    );
    assert!(level.battlefield().is_defeated(Side::Enemy));
}

#[test]
fn allies_lose_once_every_ally_is_dead() {
    let mut level = level(duel("imp", "knight"), GameConfig::default().autoplay(), 0);
    let (outcome, _) = run(&mut level, 2_000);
    assert_eq!(outcome, Some(LevelOutcome::Lose));
    assert!(level.battlefield().is_defeated(Side::Ally));
}

#[test]
fn knight_walks_into_range_before_striking() {
    let mut level = level(duel("knight", "imp"), GameConfig::default().autoplay(), 0);
    let (_, events) = run(&mut level, 2_000);

    let first_move = events.iter().find_map(|event| match event {
        GameEvent::Battle(game_core::BattleEvent::Moved { entity, from, to })
            if *entity == EntityId(0) =>
        {
            Some((*from, *to))
        }
        _ => None,
    });
    assert_eq!(first_move, Some((Position::new(1, 1), Position::new(3, 1))));

    let attack = events.iter().position(|event| {
        matches!(
            event,
            GameEvent::Battle(game_core::BattleEvent::Attacked { attacker, .. })
                if *attacker == EntityId(0)
        )
    });
    let death = events.iter().position(|event| {
        matches!(
            event,
            GameEvent::Battle(game_core::BattleEvent::Died { .. })
        )
    });
    assert!(attack.is_some());
    assert!(attack < death);
}

#[test]
fn finished_level_stops_advancing() {
    let mut level = level(duel("knight", "imp"), GameConfig::default().autoplay(), 0);
    let (outcome, _) = run(&mut level, 2_000);
    let elapsed = level.elapsed();

    assert_eq!(level.update(TICK), outcome);
    assert_eq!(level.elapsed(), elapsed);
    assert!(level.drain_events().is_empty());
}

#[test]
fn watchdog_ends_a_stalemate_deterministically() {
    let mut layout = duel("knight", "knight");
    for y in 0..6 {
        layout = layout.with_cell(CellSpec::new(2, y, TerrainKind::Obstacle));
    }
    let config = GameConfig {
        level_time_limit_ms: 400,
        ..GameConfig::default().autoplay()
    };

    let verdict = |seed| {
        let mut level = level(layout.clone(), config.clone(), seed)
            .with_provider(Box::new(WaitActionProvider));
        let (outcome, _) = run(&mut level, 100);
        (outcome, level.elapsed())
    };

    let (outcome, elapsed) = verdict(11);
    assert!(outcome.is_some());
    assert!(elapsed > Duration::from_millis(400));
    assert!(elapsed <= Duration::from_millis(400) + TICK);
    assert_eq!(verdict(11), (outcome, elapsed));

    let mut reference = Watchdog::new(Duration::from_millis(400), 11);
    let level = level(layout, config, 11);
    assert_eq!(reference.evaluate(level.battlefield(), elapsed), outcome);
}

#[test]
fn custom_conditions_replace_the_defaults() {
    struct AfterTicks(u32);

    impl VictoryCondition for AfterTicks {
        fn evaluate(
            &mut self,
            _battlefield: &game_core::Battlefield,
            _elapsed: Duration,
        ) -> Option<LevelOutcome> {
            self.0 = self.0.saturating_sub(1);
            (self.0 == 0).then_some(LevelOutcome::Lose)
        }

        fn name(&self) -> &'static str {
            "after_ticks"
        }
    }

    let mut level = level(duel("knight", "imp"), GameConfig::default().autoplay(), 0)
        .with_conditions(vec![Box::new(AfterTicks(3))]);
    let (outcome, _) = run(&mut level, 10);
    assert_eq!(outcome, Some(LevelOutcome::Lose));
    assert_eq!(level.elapsed(), TICK * 3);
}
