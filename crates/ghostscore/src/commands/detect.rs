//! Detect command — 21-signal AI-authorship scoring.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ghostscore_core::config::Config;
use ghostscore_core::report::RiskLevel;
use ghostscore_core::{check_input, detection};

use super::read_input;

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to analyze (omit or use `-` for stdin).
    pub file: Option<Utf8PathBuf>,

    /// Minimum input length in characters.
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Show all 21 signals, not just flagged ones.
    #[arg(long)]
    pub all_signals: bool,
}

fn risk_colored(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::Low => risk.as_str().green().to_string(),
        RiskLevel::Moderate => risk.as_str().yellow().to_string(),
        RiskLevel::High => risk.as_str().red().to_string(),
    }
}

fn score_colored(score: u8) -> String {
    match score {
        0..=2 => score.green().to_string(),
        3 => score.yellow().to_string(),
        _ => score.red().to_string(),
    }
}

/// Run authorship detection on a file or stdin.
#[instrument(name = "cmd_detect", skip_all, fields(file = ?args.file))]
pub fn cmd_detect(args: DetectArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, min_chars = ?args.min_chars, "executing detect command");

    let max_input = config.input_limit();
    let content = read_input(args.file.as_deref(), max_input)?;

    let min_chars = args.min_chars.unwrap_or(config.min_chars);
    check_input(&content, min_chars, max_input).context("input rejected")?;

    let report = detection::analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let label = args.file.as_deref().map_or("(stdin)", |p| p.as_str());
    println!("{}", label.bold());
    println!(
        "\n  {} {:.2}/5 — {} risk",
        "Composite:".cyan(),
        report.composite_score,
        risk_colored(report.risk_level),
    );
    println!(
        "  {} {} words, {} sentences, {} paragraphs",
        "Input:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );

    println!();
    for signal in &report.signals {
        if !args.all_signals && signal.score < 3 {
            continue;
        }
        println!(
            "  {}/5 [w{}] {} — {}",
            score_colored(signal.score),
            signal.weight,
            signal.name,
            signal.detail,
        );
        for example in signal.examples.iter().take(3) {
            println!("        {}", example.dimmed());
        }
    }

    Ok(())
}
