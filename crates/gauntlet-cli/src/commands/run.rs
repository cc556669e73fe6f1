//! `gauntlet run` - run a challenge and score the result

use crate::console::CLIConsole;
use crate::display;
use colored::*;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use futures::StreamExt;
use gauntlet_core::challenge::{find_challenge, load_challenges, Challenge};
use gauntlet_core::client::{AgentClient, JudgeClient};
use gauntlet_core::stream::RenderEvent;
use gauntlet_core::{Config, GauntletError, GauntletResult};
use std::path::Path;

pub struct RunOptions<'a> {
    pub config_file: &'a Path,
    pub challenge_id: Option<&'a str>,
    pub no_judge: bool,
    pub no_stream: bool,
    pub max_turns: Option<u32>,
    pub verbose: bool,
}

pub async fn execute(options: RunOptions<'_>) -> GauntletResult<()> {
    let mut console = CLIConsole::new(options.verbose);
    let config = Config::load(options.config_file)?;
    let challenges = load_challenges(&config.challenges_file)?;

    let challenge = match options.challenge_id {
        Some(id) => find_challenge(&challenges, id)
            .ok_or_else(|| GauntletError::invalid_input(format!("unknown challenge {id:?}")))?,
        None => pick_challenge(&challenges)?,
    };

    tracing::debug!(
        "selected challenge {} ({})",
        challenge.id,
        challenge.difficulty.label()
    );
    console.print_header(&challenge.title);
    println!("{}", challenge.description.dimmed());

    let max_turns = options.max_turns.unwrap_or(config.max_turns);
    let agent = AgentClient::new(&config.agent_api, max_turns);
    console.info(&format!(
        "running against {} (max {} turns)",
        config.agent_api, max_turns
    ));

    let agent_response = if options.no_stream {
        run_unary(&console, &agent, challenge).await?
    } else {
        run_streaming(&console, &agent, challenge).await?
    };

    let Some(agent_response) = agent_response else {
        console.warn("agent finished without a final summary; skipping the judge");
        return Ok(());
    };

    if options.no_judge {
        return Ok(());
    }

    console.start_spinner("Evaluating with the judge...");
    let judge = JudgeClient::new(&config.judge_api);
    let evaluation = judge
        .verify(
            &challenge.description,
            &agent_response,
            challenge.model_answer.as_deref(),
        )
        .await;
    console.stop_spinner();

    match evaluation {
        Ok(evaluation) => {
            display::render_evaluation(&evaluation);
            Ok(())
        }
        Err(err) => {
            console.error(&format!(
                "{err}\nMake sure the judge server is running on {}",
                config.judge_api
            ));
            Err(err)
        }
    }
}

/// Stream the agent's progress, rendering each event as it finalizes
///
/// Returns the `final` summary when the run produced one.
async fn run_streaming(
    console: &CLIConsole,
    agent: &AgentClient,
    challenge: &Challenge,
) -> GauntletResult<Option<String>> {
    println!();
    println!("{} {}", "🤖", "Agent Working...".bold());

    let mut stream = agent.complete_task_stream(&challenge.description).await?;
    let mut summary = None;

    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                if let RenderEvent::Final { summary: ref text } = event {
                    summary = Some(text.clone());
                }
                display::render_event(&event);
            }
            Err(err) => {
                console.error(&err.to_string());
                return Err(err);
            }
        }
    }

    if summary.is_some() {
        console.success("Agent complete");
    }
    Ok(summary)
}

/// Use the unary endpoint: one request, one summary
async fn run_unary(
    console: &CLIConsole,
    agent: &AgentClient,
    challenge: &Challenge,
) -> GauntletResult<Option<String>> {
    let result = agent.complete_task(&challenge.description).await;
    match result {
        Ok(response) => {
            display::render_event(&RenderEvent::Final {
                summary: response.summary.clone(),
            });
            Ok(Some(response.summary))
        }
        Err(err) => {
            console.error(&err.to_string());
            Err(err)
        }
    }
}

/// Interactive challenge picker
fn pick_challenge(challenges: &[Challenge]) -> GauntletResult<&Challenge> {
    let items: Vec<String> = challenges
        .iter()
        .map(|c| format!("{} - {} ({})", c.id, c.title, c.difficulty.label()))
        .collect();

    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a challenge")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| GauntletError::invalid_input(format!("selection aborted: {e}")))?;

    Ok(&challenges[index])
}
