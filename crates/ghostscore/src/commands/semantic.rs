//! Semantic command — entity and LSI keyword coverage.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ghostscore_core::analyze_semantic_coverage;
use ghostscore_core::config::Config;

use super::read_input;

/// Arguments for the `semantic` subcommand.
#[derive(Args, Debug)]
pub struct SemanticArgs {
    /// File to analyze (omit or use `-` for stdin).
    pub file: Option<Utf8PathBuf>,

    /// Target entities (comma-separated, repeatable).
    #[arg(long, value_delimiter = ',')]
    pub entities: Vec<String>,

    /// Target LSI keywords (comma-separated, repeatable).
    #[arg(long = "lsi", value_delimiter = ',')]
    pub lsi_keywords: Vec<String>,
}

/// Score semantic coverage of a file or stdin.
#[instrument(name = "cmd_semantic", skip_all, fields(file = ?args.file))]
pub fn cmd_semantic(args: SemanticArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(
        file = ?args.file,
        entities = args.entities.len(),
        lsi = args.lsi_keywords.len(),
        "executing semantic command"
    );

    let content = read_input(args.file.as_deref(), config.input_limit())?;

    let report = analyze_semantic_coverage(&content, &args.entities, &args.lsi_keywords);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let label = args.file.as_deref().map_or("(stdin)", |p| p.as_str());
    println!("{}", label.bold());
    println!("\n  {} {}/100", "Coverage:".cyan(), report.score);
    println!(
        "  {} {}/{} covered",
        "Entities:".cyan(),
        report.entities_covered.len(),
        report.entities_covered.len() + report.entities_missing.len(),
    );
    println!(
        "  {} {}/{} covered",
        "LSI keywords:".cyan(),
        report.lsi_covered.len(),
        report.lsi_covered.len() + report.lsi_missing.len(),
    );

    if !report.entities_missing.is_empty() {
        println!(
            "\n  {} {}",
            "Missing entities:".yellow(),
            report.entities_missing.join(", "),
        );
    }
    if !report.lsi_missing.is_empty() {
        println!(
            "  {} {}",
            "Missing keywords:".yellow(),
            report.lsi_missing.join(", "),
        );
    }

    Ok(())
}
