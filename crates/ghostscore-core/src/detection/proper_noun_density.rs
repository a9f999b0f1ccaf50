//! Signal 15: Proper Noun Density.
//!
//! Named people, places, and products anchor a text in reality; vague
//! appeals to "experts" and "studies" float free of it. Sentence-initial
//! words are skipped so ordinary capitalization does not count.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 15;
const NAME: &str = "Proper Noun Density";

static VAGUE_REFS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(many (people|experts|studies|researchers)|some (argue|believe|say)|experts say|studies show|research suggests|it has been (shown|found|noted))\b",
    )
    .expect("vague reference pattern is valid")
});

/// Capitalized mid-sentence words that are not proper-noun evidence.
const SKIP_WORDS: [&str; 4] = ["i", "the", "a", "an"];

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let mut proper: HashSet<String> = HashSet::new();
    for sentence in text::tokenize_sentences(text) {
        for token in sentence.split_whitespace().skip(1) {
            let Some(first) = token.chars().next() else {
                continue;
            };
            if first.is_uppercase() && !SKIP_WORDS.contains(&token.to_lowercase().as_str()) {
                proper.insert(token.to_string());
            }
        }
    }

    let vague = VAGUE_REFS.find_iter(&text.to_lowercase()).count();
    let pn_density = proper.len() as f64 / words.len().max(1) as f64 * 100.0;

    let mut examples = Vec::new();
    if vague > 0 {
        examples.push(format!(
            "{vague} vague references (\"experts say\", \"studies show\")"
        ));
    }
    if proper.is_empty() && words.len() > 100 {
        examples.push("No proper nouns in 100+ word text".to_string());
    }

    let score = if pn_density > 2.0 && vague == 0 {
        1
    } else if pn_density > 1.0 || vague == 0 {
        2
    } else if vague <= 1 {
        3
    } else if vague <= 3 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Proper nouns: {} | Vague references: {vague}", proper.len()),
        examples,
    }
}
