//! Signal 14: Adverbial Fluff Score.
//!
//! Counts intensity adverbs that pad sentences without adding meaning.

use crate::report::SignalScore;
use crate::word_lists::{FLUFF_ADVERB_PATTERNS, FLUFF_ADVERBS};

const SIGNAL_ID: u8 = 14;
const NAME: &str = "Adverbial Fluff Score";

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();

    let mut found: Vec<(&str, usize)> = Vec::new();
    for (adverb, pattern) in FLUFF_ADVERBS.iter().zip(FLUFF_ADVERB_PATTERNS.iter()) {
        let count = pattern.find_iter(&lower).count();
        if count > 0 {
            found.push((adverb, count));
        }
    }

    let total: usize = found.iter().map(|(_, count)| count).sum();
    let density = total as f64 / words.len().max(1) as f64 * 100.0;

    let examples: Vec<String> = found
        .iter()
        .take(5)
        .map(|(adverb, _)| format!("Fluff adverb: \"{adverb}\""))
        .collect();

    let score = if total == 0 {
        1
    } else if total <= 2 {
        2
    } else if total <= 4 {
        3
    } else if total <= 7 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Fluff adverbs: {total} | Density: {density:.2} per 100 words"),
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
    fn plain_prose_scores_human() {
        let s = run("The patch fixes the crash and nothing else.");
        assert_eq!(s.score, 1);
        assert!(s.examples.is_empty());
    }

    #[test]
    fn a_couple_of_adverbs_score_low() {
        let s = run("The change significantly improves startup, and it truly shows.");
        assert_eq!(s.score, 2, "{}", s.detail);
        assert_eq!(s.examples.len(), 2);
    }

    #[test]
    fn saturated_adverbs_score_ai() {
        let s = run(
            "This truly remarkable tool is incredibly fast, extremely simple, \
             absolutely reliable, genuinely useful, undoubtedly essential, \
             fundamentally sound, and ultimately transformative.",
        );
        assert_eq!(s.score, 5, "{}", s.detail);
        assert_eq!(s.examples.len(), 5);
    }
}
