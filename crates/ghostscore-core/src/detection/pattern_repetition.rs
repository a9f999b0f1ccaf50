//! Signal 4: Pattern Repetition Audit.
//!
//! Flags mechanically repeated sentence openings and suspiciously uniform
//! list items. Repeated-opening tracking preserves first-occurrence order
//! so reports are stable across runs.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 4;
const NAME: &str = "Pattern Repetition Audit";

static LIST_ITEMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\n)\s*[-•*]\s*(.+)").expect("list item pattern is valid")
});

pub fn evaluate(
    text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    if sentences.len() < 4 {
        return SignalScore::ambiguous(
            SIGNAL_ID,
            NAME,
            "Too few sentences for repetition analysis.",
        );
    }

    let openings: Vec<String> = sentences
        .iter()
        .map(|s| {
            text::tokenize_words(s)
                .into_iter()
                .take(3)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for opening in &openings {
        *counts.entry(opening.as_str()).or_insert(0) += 1;
    }
    let mut repeated: Vec<(&str, usize)> = Vec::new();
    for opening in &openings {
        let count = counts[opening.as_str()];
        if count >= 3 && !repeated.iter().any(|(o, _)| *o == opening.as_str()) {
            repeated.push((opening.as_str(), count));
        }
    }

    let item_lengths: Vec<f64> = LIST_ITEMS
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| text::tokenize_words(m.as_str()).len() as f64)
        .collect();
    let list_std = if item_lengths.len() >= 3 {
        super::std_dev(&item_lengths)
    } else {
        0.0
    };

    let repeated_total: usize = repeated.iter().map(|(_, n)| n).sum();

    let examples: Vec<String> = repeated
        .iter()
        .take(5)
        .map(|(opening, count)| format!("Opening \"{opening}...\" repeated {count} times"))
        .collect();

    let score = if repeated_total == 0 && list_std > 5.0 {
        1
    } else if repeated_total <= 3 {
        2
    } else if repeated_total <= 6 {
        3
    } else if repeated_total <= 9 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Repeated openings: {} patterns | List item length StdDev: {list_std:.1}",
            repeated.len()
        ),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize_sentences;

    fn run(text: &str) -> SignalScore {
        let sentences = tokenize_sentences(text);
        evaluate(text, &sentences, &[], &[])
    }

    #[test]
    fn three_sentences_is_ambiguous() {
        let s = run("One here. Two here. Three here.");
        assert_eq!(s.score, 3);
    }

    #[test]
    fn repeated_openings_are_flagged() {
        let text = "The system is fast. The system is safe. The system is small. \
                    Users like that a lot.";
        let s = run(text);
        assert!(s.score >= 2, "{}", s.detail);
        assert_eq!(s.examples.len(), 1);
        assert!(s.examples[0].contains("\"the system is...\""));
        assert!(s.examples[0].contains("3 times"));
    }

    #[test]
    fn varied_openings_with_varied_lists_score_human() {
        let text = "Packing for the trip took longer than expected.\n\
                    - socks\n\
                    - a paperback novel I have been meaning to finish for months now\n\
                    - chargers\n\
                    Eventually everything fit. Nobody checked the weather. We left \
                    at dawn anyway. Rain caught us by noon.";
        let s = run(text);
        assert_eq!(s.score, 1, "{}", s.detail);
    }
}
