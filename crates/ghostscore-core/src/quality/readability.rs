//! Readability scoring via Flesch-Kincaid grade and Flesch reading ease.
//!
//! Grade formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//! Ease formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! The ease value maps onto a 0–100 quality score with 60–80 ease (typical
//! good web copy) scoring highest. Syllables come from a suffix-stripping
//! heuristic, not a dictionary; the thresholds were calibrated against it.

use std::sync::LazyLock;

use regex::Regex;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static SYLLABLE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("syllable suffix pattern is valid")
});

static VOWEL_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel group pattern is valid"));

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Quality score, 0–100.
    pub score: u32,
    /// Flesch-Kincaid grade level, clamped at 0.
    pub grade_level: f64,
    /// Average words per sentence.
    pub avg_sentence_length: f64,
    /// Average syllables per word.
    pub avg_syllables_per_word: f64,
}

/// Estimate syllables in a single word.
fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if cleaned.len() <= 3 {
        return 1;
    }

    let stripped = SYLLABLE_SUFFIX.replace(&cleaned, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);
    let groups = VOWEL_GROUPS.find_iter(stripped).count();
    groups.max(1)
}

/// Score how easily a draft reads.
///
/// Texts under 10 words return the neutral score 50 with zeroed statistics.
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let sentences = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() < 10 {
        return ReadabilityReport {
            score: 50,
            grade_level: 0.0,
            avg_sentence_length: 0.0,
            avg_syllables_per_word: 0.0,
        };
    }

    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let avg_sentence_length = words.len() as f64 / sentences.max(1) as f64;
    let avg_syllables_per_word = total_syllables as f64 / words.len() as f64;

    let grade_level = 0.39f64.mul_add(avg_sentence_length, 11.8 * avg_syllables_per_word) - 15.59;
    let reading_ease =
        206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;

    // Ideal reading ease for web content is 60–80.
    let score = if (60.0..=80.0).contains(&reading_ease) {
        90.0 + (reading_ease - 60.0) * 0.5
    } else if (50.0..60.0).contains(&reading_ease) {
        70.0 + (reading_ease - 50.0)
    } else if (30.0..50.0).contains(&reading_ease) {
        40.0 + (reading_ease - 30.0) * 1.5
    } else if reading_ease < 30.0 {
        reading_ease.max(10.0)
    } else {
        // Over 80: too simple.
        (90.0 - (reading_ease - 80.0) * 0.5).max(50.0)
    };

    ReadabilityReport {
        score: score.round().clamp(0.0, 100.0) as u32,
        grade_level: grade_level.max(0.0),
        avg_sentence_length,
        avg_syllables_per_word,
    }
}
