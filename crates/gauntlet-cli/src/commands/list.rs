//! `gauntlet list` - show the challenge catalog

use crate::console::CLIConsole;
use colored::*;
use gauntlet_core::challenge::load_challenges;
use gauntlet_core::{Config, Difficulty, GauntletResult};
use std::path::Path;

pub fn execute(config_file: &Path, verbose: bool) -> GauntletResult<()> {
    let console = CLIConsole::new(verbose);
    let config = Config::load(config_file)?;
    let challenges = load_challenges(&config.challenges_file)?;

    console.print_header("Challenges");
    for challenge in &challenges {
        let badge = difficulty_badge(challenge.difficulty);
        println!(
            "  {}  {} {} {}",
            challenge.id.cyan().bold(),
            challenge.title,
            badge,
            format!("[{}]", challenge.category).dimmed(),
        );
        if verbose {
            println!("      {}", challenge.description.dimmed());
        }
    }
    println!();
    console.info(&format!("{} challenge(s) loaded", challenges.len()));
    Ok(())
}

fn difficulty_badge(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.label().green(),
        Difficulty::Medium => difficulty.label().yellow(),
        Difficulty::Hard => difficulty.label().red(),
    }
}
