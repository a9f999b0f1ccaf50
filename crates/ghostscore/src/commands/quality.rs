//! Quality command — readability, structure, and completeness scoring.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ghostscore_core::config::Config;
use ghostscore_core::quality::{self, ContentType};

use super::read_input;

/// Arguments for the `quality` subcommand.
#[derive(Args, Debug)]
pub struct QualityArgs {
    /// File to analyze (omit or use `-` for stdin).
    pub file: Option<Utf8PathBuf>,

    /// Content type for word-count targets.
    #[arg(long, value_enum)]
    pub content_type: Option<ContentType>,
}

fn score_colored(score: u32) -> String {
    if score >= 80 {
        score.green().to_string()
    } else if score >= 60 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}

/// Score content quality of a file or stdin.
#[instrument(name = "cmd_quality", skip_all, fields(file = ?args.file))]
pub fn cmd_quality(args: QualityArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, content_type = ?args.content_type, "executing quality command");

    let content = read_input(args.file.as_deref(), config.input_limit())?;

    let content_type = args.content_type.or(config.content_type);
    let report = quality::analyze_quality(&content, content_type);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let label = args.file.as_deref().map_or("(stdin)", |p| p.as_str());
    println!("{}", label.bold());
    if let Some(ct) = content_type {
        println!("  {} {}", "Content type:".cyan(), ct.as_str());
    }
    println!(
        "\n  {} {}/100",
        "Quality:".cyan(),
        score_colored(report.score),
    );
    println!(
        "  {} {}/100 (grade {:.1}, {:.1} words/sentence)",
        "Readability:".cyan(),
        score_colored(report.readability.score),
        report.readability.grade_level,
        report.readability.avg_sentence_length,
    );
    println!(
        "  {} {}/100 ({} headings, {} paragraphs)",
        "Structure:".cyan(),
        score_colored(report.structure.score),
        report.structure.heading_count,
        report.structure.paragraph_count,
    );
    println!(
        "  {} {}/100 ({} words, target {}-{})",
        "Completeness:".cyan(),
        score_colored(report.completeness.score),
        report.completeness.word_count,
        report.completeness.target_min,
        report.completeness.target_max,
    );

    let suggestions: Vec<&String> = report
        .structure
        .suggestions
        .iter()
        .chain(report.completeness.suggestions.iter())
        .collect();
    if !suggestions.is_empty() {
        println!();
        for suggestion in suggestions {
            println!("  {} {suggestion}", "-".dimmed());
        }
    }

    Ok(())
}
