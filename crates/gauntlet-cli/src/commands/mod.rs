//! CLI command implementations

mod config;
mod list;
mod run;

use crate::args::{Cli, Commands};
use gauntlet_core::GauntletResult;

/// Dispatch the parsed CLI to its command
pub async fn route(cli: Cli) -> GauntletResult<()> {
    match cli.command {
        Commands::List => list::execute(&cli.config_file, cli.verbose),
        Commands::Run {
            ref challenge_id,
            no_judge,
            no_stream,
            max_turns,
        } => {
            run::execute(run::RunOptions {
                config_file: &cli.config_file,
                challenge_id: challenge_id.as_deref(),
                no_judge,
                no_stream,
                max_turns,
                verbose: cli.verbose,
            })
            .await
        }
        Commands::Config { ref action } => config::execute(&cli.config_file, action, cli.verbose),
    }
}
