//! Gauntlet console CLI
//!
//! A manual test console for agent challenges: pick a challenge, stream the
//! remote agent's attempt at it, then have the remote judge score the
//! result.
//!
//! ```bash
//! gauntlet list
//! gauntlet run sqli-basic
//! gauntlet run            # interactive picker
//! ```

mod args;
mod commands;
mod console;
mod display;

use clap::Parser;
use gauntlet_core::GauntletResult;

pub use args::{Cli, Commands, ConfigAction};

#[tokio::main]
async fn main() -> GauntletResult<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::route(cli).await
}
