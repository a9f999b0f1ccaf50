//! Document structure scoring.
//!
//! Rewards headings, digestible paragraph lengths, and lists; penalizes
//! walls of text. Heading detection accepts markdown `#` syntax and bare
//! short title lines.

use std::sync::LazyLock;

use regex::Regex;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("heading pattern is valid"));

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s").expect("numbered item pattern is valid"));

/// Result of structure analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StructureReport {
    /// Quality score, 0–100.
    pub score: u32,
    /// Headings detected (markdown or bare title lines).
    pub heading_count: usize,
    /// Paragraph count.
    pub paragraph_count: usize,
    /// Whether the document has a main title.
    pub has_h1: bool,
    /// Average paragraph length in words, rounded.
    pub avg_paragraph_length: u32,
    /// Actionable structural suggestions.
    pub suggestions: Vec<String>,
}

/// A bare line reads as a title when it is short, unindented, and has no
/// terminal period.
fn is_title_line(line: &str) -> bool {
    let len = line.chars().count();
    len < 80 && len > 3 && line == line.trim() && !line.ends_with('.')
}

/// Score a draft's document structure.
pub fn analyze_structure(text: &str) -> StructureReport {
    let lines: Vec<&str> = text.lines().collect();
    let paragraphs = text::paragraphs(text);

    let heading_count = lines
        .iter()
        .filter(|l| MD_HEADING.is_match(l) || is_title_line(l))
        .count();

    let has_h1 = lines.iter().any(|l| l.starts_with("# "))
        || paragraphs
            .first()
            .is_some_and(|p| p.split_whitespace().count() < 15);

    let para_lengths: Vec<usize> = paragraphs
        .iter()
        .map(|p| p.split_whitespace().count())
        .collect();
    let avg_paragraph_length = if para_lengths.is_empty() {
        0.0
    } else {
        para_lengths.iter().sum::<usize>() as f64 / para_lengths.len() as f64
    };

    let mut suggestions = Vec::new();
    let mut score: i64 = 70;

    if heading_count == 0 && paragraphs.len() > 3 {
        suggestions.push("Add headings to break up content into sections".to_string());
        score -= 20;
    } else if heading_count >= 2 {
        score += 10;
    }

    if !has_h1 {
        suggestions.push("Add a main title (H1 heading)".to_string());
        score -= 10;
    }

    let long_paras = para_lengths.iter().filter(|&&l| l > 150).count();
    if long_paras > 0 {
        suggestions.push(format!(
            "{long_paras} paragraph{} too long (150+ words) - consider splitting",
            if long_paras > 1 { "s are" } else { " is" }
        ));
        score -= long_paras as i64 * 5;
    }

    let short_paras = para_lengths.iter().filter(|&&l| l < 10 && l > 0).count();
    if short_paras * 2 > paragraphs.len() && paragraphs.len() > 3 {
        suggestions.push("Many paragraphs are very short - consider combining some".to_string());
        score -= 10;
    }

    let has_list =
        text.contains("- ") || text.contains("* ") || NUMBERED_ITEM.is_match(text);
    if !has_list && paragraphs.len() > 5 {
        suggestions.push("Consider adding bullet points or lists for key information".to_string());
        score -= 5;
    }

    StructureReport {
        score: score.clamp(0, 100) as u32,
        heading_count,
        paragraph_count: paragraphs.len(),
        has_h1,
        avg_paragraph_length: avg_paragraph_length.round() as u32,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_structured_draft_scores_high() {
        let text = "# Guide Title\n\n\
                    An intro paragraph with enough words to stand on its own here.\n\n\
                    ## First Section\n\n\
                    Body copy explaining the first idea in reasonable detail today.\n\n\
                    - one solid point about the topic\n- another solid point about the topic";
        let report = analyze_structure(text);
        assert!(report.score >= 80, "score {}", report.score);
        assert!(report.has_h1);
        assert!(report.heading_count >= 2);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn wall_of_text_gets_heading_suggestion() {
        let filler =
            "this paragraph carries plenty of ordinary words to make its point today.";
        let text = format!("{filler}\n\n{filler}\n\n{filler}\n\n{filler}\n\n{filler}");
        let report = analyze_structure(&text);
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s.contains("Add headings")),
            "{:?}",
            report.suggestions
        );
    }

    #[test]
    fn overlong_paragraph_is_penalized() {
        let long_para = "word ".repeat(180);
        let text = format!("# Title\n\nShort intro paragraph right here.\n\n{long_para}");
        let report = analyze_structure(&text);
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s.contains("too long")),
            "{:?}",
            report.suggestions
        );
    }

    #[test]
    fn missing_title_is_flagged() {
        let para = "a body paragraph with a full stop at the end and plenty of ordinary \
                    words to keep it from looking like a title line.";
        let text = format!("{para}\n\n{para}");
        let report = analyze_structure(&text);
        assert!(!report.has_h1);
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s.contains("main title")),
            "{:?}",
            report.suggestions
        );
    }
}
