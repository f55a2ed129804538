//! Tactics arena client binary.
//!
//! # Examples
//!
//! ```bash
//! # Watch the AI play the bundled campaign
//! RUST_LOG=runtime=debug cargo run -p tactics-client
//!
//! # Command the ally side from the terminal
//! TACTICS_AUTOPLAY=false cargo run -p tactics-client
//! ```

use anyhow::Result;
use tactics_client::{Client, ClientConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        autoplay = config.autoplay,
        seed = config.seed,
        "starting tactics client"
    );

    let mut client = Client::builder().config(config).build()?;
    let summary = client.run()?;

    println!(
        "Finished after {} frames: {} level(s) won, {} lost",
        summary.frames, summary.levels_won, summary.levels_lost
    );
    Ok(())
}
