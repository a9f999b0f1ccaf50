//! Signal 19: Prompt Leakage Detection.
//!
//! Assistant framing ("As an AI model...", "I hope this helps") and
//! prompt scaffolding ("[insert name]") are direct evidence of pasted
//! model output. Each pattern counts once.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::word_lists::PROMPT_LEAKAGE_PATTERNS;

const SIGNAL_ID: u8 = 19;
const NAME: &str = "Prompt Leakage Detection";

static STARTS_WITH_NUMBERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*1[.)]\s").expect("numbered list pattern is valid"));

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let trimmed = lower.trim();

    let found: Vec<&str> = PROMPT_LEAKAGE_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(trimmed))
        .map(|(source, _)| *source)
        .collect();
    let opens_with_list = STARTS_WITH_NUMBERED_LIST.is_match(text.trim());

    let total = found.len() + usize::from(opens_with_list);

    let mut examples: Vec<String> = found
        .iter()
        .take(3)
        .map(|source| format!("Prompt pattern detected: {source}"))
        .collect();
    if opens_with_list {
        examples.push("Text opens with a numbered list".to_string());
    }

    let score = match total {
        0 => 1,
        1 => 3,
        2 => 4,
        _ => 5,
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Leakage patterns: {total}"),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_scores_human() {
        let s = evaluate("The harvest came in late this year.", &[], &[], &[]);
        assert_eq!(s.score, 1);
        assert!(s.examples.is_empty());
    }

    #[test]
    fn single_leak_jumps_to_mid() {
        let s = evaluate("I hope this article helps you plan the trip.", &[], &[], &[]);
        assert_eq!(s.score, 3, "{}", s.detail);
        assert!(s.examples[0].starts_with("Prompt pattern detected:"));
    }

    #[test]
    fn assistant_framing_scores_ai() {
        let text = "Certainly! Here is an article about travel. As an AI language \
                    model, I cannot browse current listings. Feel free to adjust \
                    the itinerary. [insert hotel name]";
        let s = evaluate(text, &[], &[], &[]);
        assert_eq!(s.score, 5, "{}", s.detail);
        assert_eq!(s.examples.len(), 3);
    }

    #[test]
    fn numbered_list_opening_counts_once() {
        let s = evaluate("1. Start with the basics and go from there.", &[], &[], &[]);
        assert_eq!(s.score, 3, "{}", s.detail);
        assert_eq!(s.examples[0], "Text opens with a numbered list");
    }
}
