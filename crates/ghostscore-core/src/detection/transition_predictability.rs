//! Signal 8: Transition Word Predictability.
//!
//! Generated prose leans on a small, predictable stable of formal
//! transitions. Counts total occurrences of signature transition phrases.

use crate::report::SignalScore;
use crate::word_lists::{AI_TRANSITION_PHRASES, TRANSITION_MATCHER, phrase_hits};

const SIGNAL_ID: u8 = 8;
const NAME: &str = "Transition Word Predictability";

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let hits = phrase_hits(&TRANSITION_MATCHER, AI_TRANSITION_PHRASES, &lower);
    let total: usize = hits.iter().map(|(_, count)| count).sum();

    let examples: Vec<String> = hits
        .iter()
        .take(5)
        .map(|(phrase, _)| format!("AI transition: \"{phrase}\""))
        .collect();

    let score = match total {
        0 => 1,
        1 => 2,
        2 => 3,
        3 | 4 => 4,
        _ => 5,
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("AI-signature transitions found: {total}"),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_transitions_scores_human() {
        let s = evaluate("The dog barked. Then it slept all afternoon.", &[], &[], &[]);
        assert_eq!(s.score, 1);
        assert!(s.examples.is_empty());
    }

    #[test]
    fn three_transitions_score_four() {
        let text = "Furthermore, the data is clear. Moreover, the trend holds. \
                    It is worth noting that exceptions exist.";
        let s = evaluate(text, &[], &[], &[]);
        assert_eq!(s.score, 4, "{}", s.detail);
        assert!(s.detail.contains("found: 3"));
        assert_eq!(s.examples[0], "AI transition: \"furthermore\"");
    }

    #[test]
    fn repeats_count_as_occurrences() {
        let text = "Furthermore this. Furthermore that. Furthermore the other. \
                    Furthermore again. Furthermore still.";
        let s = evaluate(text, &[], &[], &[]);
        assert_eq!(s.score, 5, "{}", s.detail);
        assert_eq!(s.examples.len(), 1);
    }
}
