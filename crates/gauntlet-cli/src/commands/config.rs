//! `gauntlet config` - configuration management

use crate::args::ConfigAction;
use crate::console::CLIConsole;
use gauntlet_core::{Config, GauntletResult};
use std::path::Path;

pub fn execute(config_file: &Path, action: &ConfigAction, verbose: bool) -> GauntletResult<()> {
    let console = CLIConsole::new(verbose);
    match action {
        ConfigAction::Show => {
            let config = Config::load(config_file)?;
            console.print_header("Configuration");
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            Config::init_file(config_file, *force)?;
            console.success(&format!("wrote {}", config_file.display()));
            Ok(())
        }
    }
}
