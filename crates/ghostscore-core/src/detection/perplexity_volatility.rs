//! Signal 20: Perplexity Score Volatility.
//!
//! Proxy for predictability: the share of words longer than three letters
//! that fall outside a high-frequency vocabulary. Predictable texts built
//! almost entirely from common words score as generated.

use crate::report::SignalScore;
use crate::word_lists::COMMON_WORDS;

const SIGNAL_ID: u8 = 20;
const NAME: &str = "Perplexity Score Volatility";

pub fn evaluate(
    _text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let uncommon = words
        .iter()
        .filter(|w| w.chars().count() > 3 && !COMMON_WORDS.contains(w.as_str()))
        .count();
    let ratio = uncommon as f64 / words.len().max(1) as f64;

    let mut examples = Vec::new();
    if ratio < 0.1 {
        examples.push("Very few uncommon words — text is highly predictable".to_string());
    }

    let score = if ratio > 0.35 {
        1
    } else if ratio > 0.25 {
        2
    } else if ratio > 0.18 {
        3
    } else if ratio > 0.12 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Uncommon word ratio: {:.2}%", ratio * 100.0),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize_words;

    fn run(text: &str) -> SignalScore {
        let words = tokenize_words(text);
        evaluate(text, &[], &words, &[])
    }

    #[test]
    fn rich_vocabulary_scores_human() {
        let s = run("Cormorants skimmed brackish estuaries beneath crumbling viaducts.");
        assert_eq!(s.score, 1, "{}", s.detail);
    }

    #[test]
    fn common_vocabulary_scores_ai() {
        let s = run("They will take what they want and then they will go back home.");
        assert_eq!(s.score, 5, "{}", s.detail);
        assert!(!s.examples.is_empty());
    }

    #[test]
    fn empty_word_list_is_fully_predictable() {
        let s = evaluate("", &[], &[], &[]);
        assert_eq!(s.score, 5);
    }
}
