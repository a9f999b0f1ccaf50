//! Rewrite command — editor-facing instructions from flagged signals.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use ghostscore_core::config::Config;
use ghostscore_core::report::RiskLevel;
use ghostscore_core::{build_rewrite_instructions, check_input, detection};

use super::read_input;

/// Arguments for the `rewrite` subcommand.
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// File to analyze (omit or use `-` for stdin).
    pub file: Option<Utf8PathBuf>,

    /// Minimum input length in characters.
    #[arg(long)]
    pub min_chars: Option<usize>,
}

#[derive(Serialize)]
struct RewriteOutput {
    composite_score: f64,
    risk_level: RiskLevel,
    instructions: String,
}

/// Build rewrite instructions for a file or stdin.
#[instrument(name = "cmd_rewrite", skip_all, fields(file = ?args.file))]
pub fn cmd_rewrite(args: RewriteArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing rewrite command");

    let max_input = config.input_limit();
    let content = read_input(args.file.as_deref(), max_input)?;

    let min_chars = args.min_chars.unwrap_or(config.min_chars);
    check_input(&content, min_chars, max_input).context("input rejected")?;

    let report = detection::analyze(&content);
    let instructions = build_rewrite_instructions(&report);

    if global_json {
        let output = RewriteOutput {
            composite_score: report.composite_score,
            risk_level: report.risk_level,
            instructions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{instructions}");
    }

    Ok(())
}
