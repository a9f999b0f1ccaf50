//! Signal 6: Passive Voice Saturation.
//!
//! Ratio of sentences containing a passive construction. The pattern is a
//! rough be-verb + participle heuristic, shared calibration with the rest
//! of the engine rather than a grammar-grade parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;

const SIGNAL_ID: u8 = 6;
const NAME: &str = "Passive Voice Saturation";

static PASSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(is|are|was|were|be|been|being)\s+(\w+ed|\w+en|\w+t)\b")
        .expect("passive voice pattern is valid")
});

pub fn evaluate(
    _text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let passive_count = sentences.iter().filter(|s| PASSIVE.is_match(s)).count();
    let ratio = passive_count as f64 / sentences.len().max(1) as f64 * 100.0;

    let mut examples = Vec::new();
    for sentence in sentences.iter().take(20) {
        if examples.len() >= 3 {
            break;
        }
        if let Some(m) = PASSIVE.find(sentence) {
            examples.push(format!("Passive: \"...{}...\"", m.as_str()));
        }
    }

    let score = if ratio < 10.0 {
        1
    } else if ratio < 15.0 {
        2
    } else if ratio < 25.0 {
        3
    } else if ratio < 35.0 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Passive ratio: {ratio:.0}% ({passive_count}/{} sentences)",
            sentences.len()
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
    fn active_voice_scores_human() {
        let text = "The chef seasoned the stew. Guests arrived early. Everyone ate \
                    far too much bread.";
        let s = run(text);
        assert_eq!(s.score, 1, "{}", s.detail);
        assert!(s.examples.is_empty());
    }

    #[test]
    fn saturated_passive_scores_ai() {
        let text = "The vase was broken by the cat. The mess was cleaned by nobody. \
                    Dinner was burnt again.";
        let s = run(text);
        assert_eq!(s.score, 5, "{}", s.detail);
        assert_eq!(s.examples.len(), 3);
        assert!(s.examples[0].contains("was broken"));
    }

    #[test]
    fn empty_sentence_list_defaults_low() {
        let s = evaluate("", &[], &[], &[]);
        assert_eq!(s.score, 1);
        assert!(s.detail.contains("0/0"));
    }
}
