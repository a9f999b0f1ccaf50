//! Signal 17: Metaphor Originality.
//!
//! Fresh figurative language ("like a ...") reads as human; worn-out
//! stock metaphors read as generated.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::word_lists::{DEAD_METAPHOR_MATCHER, DEAD_METAPHORS, phrase_hits};

const SIGNAL_ID: u8 = 17;
const NAME: &str = "Metaphor Originality";

static SIMILES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\blike a\b|\bas if\b|\bas though\b").expect("simile pattern is valid")
});

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let dead: Vec<&str> = phrase_hits(&DEAD_METAPHOR_MATCHER, DEAD_METAPHORS, &lower)
        .into_iter()
        .map(|(phrase, _)| phrase)
        .collect();
    let similes = SIMILES.find_iter(&lower).count();

    let examples: Vec<String> = dead
        .iter()
        .take(5)
        .map(|phrase| format!("Dead metaphor: \"{phrase}\""))
        .collect();

    let score = if dead.is_empty() && similes >= 1 {
        1
    } else if dead.is_empty() {
        2
    } else if dead.len() == 1 {
        3
    } else if dead.len() <= 3 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Dead metaphors: {} | Similes/figurative: {similes}",
            dead.len()
        ),
        examples,
    }
}
