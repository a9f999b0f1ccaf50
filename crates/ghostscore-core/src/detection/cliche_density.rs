//! Signal 11: Cliche Density.
//!
//! Stock AI phrases plus signature vocabulary, normalized per 100 words.

use crate::report::SignalScore;
use crate::text;
use crate::word_lists::{
    AI_CLICHES, AI_SIGNATURE_WORDS, CLICHE_MATCHER, SIGNATURE_MATCHER, phrase_hits,
};

const SIGNAL_ID: u8 = 11;
const NAME: &str = "Cliche Density";

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let cliche_hits = phrase_hits(&CLICHE_MATCHER, AI_CLICHES, &lower);
    let signature_hits = phrase_hits(&SIGNATURE_MATCHER, AI_SIGNATURE_WORDS, &lower);

    // Cliches count every occurrence; signature words count once each.
    let total: usize =
        cliche_hits.iter().map(|(_, count)| count).sum::<usize>() + signature_hits.len();

    let word_count = text::tokenize_words(text).len();
    let density = total as f64 / word_count.max(1) as f64 * 100.0;

    let examples: Vec<String> = cliche_hits
        .iter()
        .map(|(phrase, _)| *phrase)
        .chain(signature_hits.iter().map(|(word, _)| *word))
        .take(5)
        .map(|phrase| format!("Cliché: \"{phrase}\""))
        .collect();

    let score = if total == 0 {
        1
    } else if total <= 1 {
        2
    } else if total <= 3 {
        3
    } else if total <= 5 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Clichés found: {total} | Density: {density:.2} per 100 words"),
        examples,
    }
}
