use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use game_content::ContentFactory;
use game_core::{Controller, Side};
use runtime::{Level, ResourceProvider, RuntimeError};

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn bundled_campaign_loads_every_level() {
    let resources = ResourceProvider::load(&ContentFactory::new(bundled_data())).unwrap();
    let config = resources.config();
    assert_eq!(config.ally_controller, Controller::Human);

    for level in config.levels() {
        let battlefield = resources.battlefield(level).unwrap();
        assert!(!battlefield.group(Side::Ally).is_empty());
        assert!(!battlefield.group(Side::Enemy).is_empty());
    }
}

#[test]
fn bundled_campaign_plays_out_under_ai_control() {
    let resources = ResourceProvider::load(&ContentFactory::new(bundled_data())).unwrap();
    let config = resources.config().clone().autoplay();
    let resources = resources.with_config(config);

    let mut level = Level::new(1, resources.battlefield(1).unwrap(), 0);
    let tick = Duration::from_millis(16);
    let mut outcome = None;
    // The watchdog bounds the level to 50s of game time.
    for _ in 0..4_000 {
        outcome = level.update(tick);
        if outcome.is_some() {
            break;
        }
    }
    assert!(outcome.is_some());
}

#[test]
fn unknown_spawn_name_fails_level_initialization() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("maps")).unwrap();
    fs::write(dir.path().join("config.toml"), "max_level = 1\n").unwrap();
    fs::write(
        dir.path().join("attributes.ron"),
        r#"{"imp": (health: 5, distance: 1, damage: 1, attack: 0, defense: 0, speed: 1)}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("maps/level_1.ron"),
        r#"(dimensions: (width: 4, height: 4), allies: [(name: "imp", x: 0, y: 0)], enemies: [(name: "ghost", x: 3, y: 3)])"#,
    )
    .unwrap();

    let resources = ResourceProvider::load(&ContentFactory::new(dir.path())).unwrap();
    assert_eq!(resources.maps().levels().collect::<Vec<_>>(), vec![1]);

    let err = resources.battlefield(1).unwrap_err();
    assert!(matches!(err, RuntimeError::Initialization { level: 1, .. }));
    assert_eq!(err.error_code(), "INIT_UNKNOWN_ENTITY");
}

#[test]
fn missing_level_file_fails_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("maps")).unwrap();
    fs::write(
        dir.path().join("attributes.ron"),
        r#"{"imp": (health: 5, distance: 1, damage: 1, attack: 0, defense: 0, speed: 1)}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("maps/level_1.ron"),
        "(dimensions: (width: 2, height: 2))",
    )
    .unwrap();

    // Defaults ask for levels 1 and 2.
    let err = ResourceProvider::load(&ContentFactory::new(dir.path())).unwrap_err();
    assert!(matches!(err, RuntimeError::Content(_)));
    assert!(err.to_string().contains("level 2"));
}
