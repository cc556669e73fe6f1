//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use gauntlet_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(about = "Gauntlet - manual test console for agent challenges")]
#[command(
    long_about = r#"Gauntlet - manual test console for agent challenges

USAGE:
  gauntlet list                  # Show the challenge catalog
  gauntlet run                   # Pick a challenge interactively and run it
  gauntlet run <id>              # Run a specific challenge
  gauntlet run <id> --no-judge   # Run without scoring afterwards

UTILITY COMMANDS:
  gauntlet config init           # Create a config file
  gauntlet config show           # Show the effective configuration

For detailed help: gauntlet --help"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config_file: PathBuf,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available challenges
    List,

    /// Run a challenge against the agent, then score it with the judge
    Run {
        /// Challenge id (omit for an interactive picker)
        challenge_id: Option<String>,

        /// Skip the judge step
        #[arg(long)]
        no_judge: bool,

        /// Use the unary completion endpoint instead of streaming progress
        #[arg(long)]
        no_stream: bool,

        /// Override the configured turn budget for this run
        #[arg(long)]
        max_turns: Option<u32>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,

    /// Create a new configuration file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
