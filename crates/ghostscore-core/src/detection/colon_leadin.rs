//! Signal 21: Colon Lead-In Density.
//!
//! "The bottom line:" / "Pro tip:" constructions are a hallmark of
//! generated listicle prose. Matches are deduplicated by their local
//! context so a repeated scan of overlapping patterns counts once.

use crate::report::SignalScore;
use crate::text;
use crate::word_lists::COLON_LEADINS;

const SIGNAL_ID: u8 = 21;
const NAME: &str = "Colon Lead-In Density";

const CONTEXT_BEFORE: usize = 10;
const CONTEXT_AFTER: usize = 30;

/// Largest char boundary at or below `index`.
fn clamp_to_boundary(s: &str, mut index: usize) -> usize {
    index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();

    let mut contexts: Vec<String> = Vec::new();
    for pattern in COLON_LEADINS.iter() {
        for m in pattern.find_iter(&lower) {
            // Scan the lowered text, but quote evidence in its source casing.
            let start = clamp_to_boundary(text, m.start().saturating_sub(CONTEXT_BEFORE));
            let end = clamp_to_boundary(text, m.end() + CONTEXT_AFTER);
            let context = text[start..end].trim().to_string();
            if !contexts.contains(&context) {
                contexts.push(context);
            }
        }
    }

    let total = contexts.len();
    let word_count = text::tokenize_words(text).len();
    let density = total as f64 / word_count.max(1) as f64 * 500.0;

    let examples: Vec<String> = contexts
        .iter()
        .take(5)
        .map(|context| format!("Colon lead-in: \"...{context}...\""))
        .collect();

    let score = if total == 0 {
        1
    } else if total == 1 && word_count > 300 {
        2
    } else if total <= 2 {
        3
    } else if total <= 4 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Colon lead-ins found: {total} | Density: {density:.1} per 500 words"),
        examples,
    }
}
