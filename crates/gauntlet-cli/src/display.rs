//! Terminal rendering of render events
//!
//! This is the presentation layer: it consumes finalized
//! [`RenderEvent`]s and never reaches into reducer state, so everything
//! upstream stays headless-testable.

use colored::*;
use gauntlet_core::client::Evaluation;
use gauntlet_core::stream::{MessageSegment, OutputBody, RenderEvent, ToolArgs};
use gauntlet_core::{Language, Verdict};

/// Print one render event to the terminal
pub fn render_event(event: &RenderEvent) {
    match event {
        RenderEvent::Thinking { text } => {
            print_event_header("💬", "Agent Thinking");
            println!("{}", indent(text));
        }
        RenderEvent::ToolCall { name, args } => {
            print_event_header("🔧", &name.magenta().bold().to_string());
            render_tool_args(args);
        }
        RenderEvent::ToolOutput { body } => {
            print_event_header("📤", "Output");
            match body {
                OutputBody::Code { language, text } => print_code_block(Some(*language), text),
                OutputBody::Terminal { text } => print_terminal_block(text),
                OutputBody::Plain { text } => println!("{}", indent(text)),
            }
        }
        RenderEvent::Message { segments } => {
            print_event_header("💬", "Agent Thinking");
            render_segments(segments);
        }
        RenderEvent::Final { summary } => {
            let width = usize::from(console::Term::stdout().size().1).clamp(20, 72);
            println!();
            println!("{} {}", "🎯".green(), "Final Response".green().bold());
            println!("{}", "─".repeat(width).green().dimmed());
            // Verbatim plain text, never code-rendered
            println!("{summary}");
            println!("{}", "─".repeat(width).green().dimmed());
        }
        RenderEvent::Error { message } => {
            print_event_header("❌", &"Error".red().bold().to_string());
            println!("{}", indent(message).red());
        }
    }
}

fn render_tool_args(args: &ToolArgs) {
    match args {
        ToolArgs::Code { language, code } => print_code_block(Some(*language), code),
        ToolArgs::Command { command } => print_code_block(Some(Language::Bash), command),
        ToolArgs::Query { query } => print_code_block(Some(Language::Sql), query),
        ToolArgs::Url { url } => println!("  {} {}", "URL:".bold(), url.underline()),
        ToolArgs::Json { pretty } => print_code_block(Some(Language::Json), pretty),
        ToolArgs::Raw { text } => println!("{}", indent(text).dimmed()),
    }
}

fn render_segments(segments: &[MessageSegment]) {
    let mut prose = String::new();
    for segment in segments {
        match segment {
            MessageSegment::Text(text) => prose.push_str(text),
            MessageSegment::Inline(code) => {
                prose.push_str(&code.cyan().on_black().to_string());
            }
            MessageSegment::Code { language, code } => {
                if !prose.trim().is_empty() {
                    println!("{}", indent(prose.trim()));
                }
                prose.clear();
                print_code_block(*language, code);
            }
        }
    }
    if !prose.trim().is_empty() {
        println!("{}", indent(prose.trim()));
    }
}

fn print_event_header(icon: &str, title: &str) {
    println!();
    println!("{icon} {}", title.bold());
}

fn print_code_block(language: Option<Language>, code: &str) {
    let label = language.map_or("Code", |l| l.label());
    println!("  {} {}", "┌".dimmed(), label.cyan());
    for line in code.lines() {
        println!("  {} {}", "│".dimmed(), line);
    }
    println!("  {}", "└".dimmed());
}

fn print_terminal_block(text: &str) {
    println!("  {} {} {} {}", "●".red(), "●".yellow(), "●".green(), "Output".dimmed());
    for line in text.lines() {
        println!("  {}", line.white().on_black());
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the judge's evaluation with verdict coloring
pub fn render_evaluation(evaluation: &Evaluation) {
    let (icon, score) = match evaluation.verdict() {
        Verdict::Pass => ("✅", evaluation.percent().green().bold()),
        Verdict::Partial => ("⚠️", evaluation.percent().yellow().bold()),
        Verdict::Fail => ("❌", evaluation.percent().red().bold()),
    };

    println!();
    println!("{} {}", "⚖️", "Judge Evaluation".bold().underline());
    println!();
    println!("{icon} Score: {score}");
    println!();
    println!("{}", evaluation.summary);
}
