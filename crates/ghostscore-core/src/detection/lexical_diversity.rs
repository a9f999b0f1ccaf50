//! Signal 1: Lexical Diversity Index.
//!
//! Rolling type-token ratio combined with a sweep for AI signature
//! vocabulary. Uniformly rich diversity with zero signature words reads
//! as human; flat diversity plus several signature words reads as AI.

use std::collections::HashSet;

use crate::report::SignalScore;
use crate::word_lists::{AI_SIGNATURE_WORDS, SIGNATURE_MATCHER, phrase_hits};

const SIGNAL_ID: u8 = 1;
const NAME: &str = "Lexical Diversity Index";

const WINDOW: usize = 100;
const STRIDE: usize = 50;

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    if words.len() < 20 {
        return SignalScore::ambiguous(
            SIGNAL_ID,
            NAME,
            "Text too short for reliable lexical analysis.",
        );
    }

    // Rolling TTR over 100-word windows at 50-word stride; windows shorter
    // than half the width are discarded to avoid end-of-text noise.
    let mut ratios = Vec::new();
    let upper = words.len().saturating_sub(WINDOW - 1).max(1);
    let mut start = 0;
    while start < upper {
        let chunk = &words[start..(start + WINDOW).min(words.len())];
        if chunk.len() >= WINDOW / 2 {
            let unique: HashSet<&str> = chunk.iter().map(String::as_str).collect();
            ratios.push(unique.len() as f64 / chunk.len() as f64);
        }
        start += STRIDE;
    }

    let avg_ttr = if ratios.is_empty() {
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
        unique.len() as f64 / words.len() as f64
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    };

    let lower = text.to_lowercase();
    let found: Vec<&str> = phrase_hits(&SIGNATURE_MATCHER, AI_SIGNATURE_WORDS, &lower)
        .into_iter()
        .map(|(word, _)| word)
        .collect();

    let examples: Vec<String> = found
        .iter()
        .take(5)
        .map(|word| format!("AI signature word: \"{word}\""))
        .collect();

    let score = if avg_ttr > 0.72 && found.is_empty() {
        1
    } else if avg_ttr > 0.65 && found.len() <= 1 {
        2
    } else if avg_ttr > 0.58 || found.len() <= 2 {
        3
    } else if avg_ttr > 0.5 || found.len() <= 3 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Avg TTR: {avg_ttr:.3} | AI signature words found: {}",
            found.len()
        ),
        examples,
    }
}
