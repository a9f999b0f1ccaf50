//! Semantic coverage scoring.
//!
//! Given target entities and LSI keywords for a topic, measures how much of
//! each set a draft covers. Entities match as substrings; LSI keywords match
//! as whole words or substrings. Coverage weighs entities 60%, LSI 40%.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static LETTER_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("letter run pattern is valid"));

/// Result of semantic coverage analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SemanticReport {
    /// Coverage score, 0–100.
    pub score: u32,
    /// Entities present in the draft.
    pub entities_covered: Vec<String>,
    /// Entities absent from the draft.
    pub entities_missing: Vec<String>,
    /// LSI keywords present in the draft.
    pub lsi_covered: Vec<String>,
    /// LSI keywords absent from the draft.
    pub lsi_missing: Vec<String>,
}

/// Score a draft's coverage of target entities and LSI keywords.
///
/// Empty target lists count as fully covered, so a run with no targets
/// scores 100.
#[tracing::instrument(skip_all, fields(entities = entities.len(), lsi = lsi_keywords.len()))]
pub fn analyze_semantic_coverage(
    text: &str,
    entities: &[String],
    lsi_keywords: &[String],
) -> SemanticReport {
    let lower = text.to_lowercase();
    let user_words: HashSet<&str> = LETTER_RUNS
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect();

    let mut entities_covered = Vec::new();
    let mut entities_missing = Vec::new();
    for entity in entities {
        if lower.contains(&entity.to_lowercase()) {
            entities_covered.push(entity.clone());
        } else {
            entities_missing.push(entity.clone());
        }
    }

    let mut lsi_covered = Vec::new();
    let mut lsi_missing = Vec::new();
    for keyword in lsi_keywords {
        let kw_lower = keyword.to_lowercase();
        if user_words.contains(kw_lower.as_str()) || lower.contains(&kw_lower) {
            lsi_covered.push(keyword.clone());
        } else {
            lsi_missing.push(keyword.clone());
        }
    }

    let entity_coverage = if entities.is_empty() {
        1.0
    } else {
        entities_covered.len() as f64 / entities.len() as f64
    };
    let lsi_coverage = if lsi_keywords.is_empty() {
        1.0
    } else {
        lsi_covered.len() as f64 / lsi_keywords.len() as f64
    };

    let score = ((entity_coverage * 0.6 + lsi_coverage * 0.4) * 100.0).round() as u32;

    SemanticReport {
        score,
        entities_covered,
        entities_missing,
        lsi_covered,
        lsi_missing,
    }
}
