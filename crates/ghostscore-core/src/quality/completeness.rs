//! Completeness scoring against per-content-type word targets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentType, DEFAULT_WORD_TARGETS};
use crate::text;

/// Result of completeness analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompletenessReport {
    /// Quality score, 0–100.
    pub score: u32,
    /// Whitespace-delimited word count.
    pub word_count: usize,
    /// Minimum target word count for the content type.
    pub target_min: usize,
    /// Maximum target word count for the content type.
    pub target_max: usize,
    /// Actionable suggestions.
    pub suggestions: Vec<String>,
}

/// Score how complete a draft is relative to its content type's targets.
pub fn analyze_completeness(
    text: &str,
    content_type: Option<ContentType>,
) -> CompletenessReport {
    let word_count = text.split_whitespace().count();
    let (target_min, target_max) =
        content_type.map_or(DEFAULT_WORD_TARGETS, |ct| ct.word_targets());

    let mut suggestions = Vec::new();
    let mut score: i64 = 70;

    if word_count >= target_min && word_count <= target_max {
        score += 25;
    } else if word_count < target_min {
        let ratio = word_count as f64 / target_min as f64;
        if ratio < 0.3 {
            score -= 30;
            suggestions.push(format!(
                "Content is very short ({word_count} words). Target: {target_min}-{target_max} words"
            ));
        } else if ratio < 0.6 {
            score -= 15;
            suggestions.push(format!(
                "Content needs more depth ({word_count}/{target_min} minimum words)"
            ));
        } else {
            score += 5;
            suggestions.push(format!(
                "Almost at target length ({word_count}/{target_min} words)"
            ));
        }
    } else {
        let over_ratio = word_count as f64 / target_max as f64;
        if over_ratio > 1.5 {
            score -= 10;
            suggestions.push(format!(
                "Content may be too long ({word_count} words, target max: {target_max}). Consider trimming"
            ));
        } else {
            score += 15;
        }
    }

    if text::paragraphs(text).len() < 3 && word_count > 200 {
        suggestions.push("Add more paragraphs for better content structure".to_string());
        score -= 10;
    }

    CompletenessReport {
        score: score.clamp(0, 100) as u32,
        word_count,
        target_min,
        target_max,
        suggestions,
    }
}
