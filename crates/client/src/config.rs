//! Process configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one client run. Game rules live in `config.toml` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Fixed timestep fed to every update.
    pub tick: Duration,
    /// Hard cap on frames before the loop gives up.
    pub max_frames: u64,
    pub seed: u64,
    /// Puts both sides under AI control and answers the menu automatically.
    pub autoplay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            tick: Duration::from_millis(16),
            max_frames: 200_000,
            seed: 0,
            autoplay: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - Content directory (default: data)
    /// - `TACTICS_TICK_MS` - Milliseconds per frame (default: 16)
    /// - `TACTICS_MAX_FRAMES` - Frame cap (default: 200000)
    /// - `TACTICS_SEED` - Seed for level watchdogs (default: 0)
    /// - `TACTICS_AUTOPLAY` - AI plays both sides (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("TACTICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(ms) = read_env::<u64>("TACTICS_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(frames) = read_env::<u64>("TACTICS_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }
        if let Some(seed) = read_env::<u64>("TACTICS_SEED") {
            config.seed = seed;
        }
        if let Some(autoplay) = read_env::<bool>("TACTICS_AUTOPLAY") {
            config.autoplay = autoplay;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
