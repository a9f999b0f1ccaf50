//! Signal 7: Idiomatic Regionalism.
//!
//! Contractions and colloquial markers are the residue of a speaking
//! voice. Formal generated prose tends to scrub both out entirely.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 7;
const NAME: &str = "Idiomatic Regionalism";

static CONTRACTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w+'(t|re|ve|ll|d|s|m)\b").expect("contraction pattern is valid")
});

static COLLOQUIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(gonna|wanna|gotta|kinda|sorta|yeah|nah|okay|ok|hey|look|honestly|frankly|literally|stuff|things|deal|pretty much|big deal|no way|for real)\b",
    )
    .expect("colloquial marker pattern is valid")
});

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let contractions = CONTRACTIONS.find_iter(&lower).count();
    let colloquial = COLLOQUIAL.find_iter(&lower).count();
    let sentence_count = text::tokenize_sentences(text).len();
    let density = contractions as f64 / sentence_count.max(1) as f64;

    let mut examples = Vec::new();
    if contractions == 0 && words.len() > 100 {
        examples.push("Zero contractions in 100+ word text".to_string());
    }

    let score = if density > 0.5 && colloquial >= 2 {
        1
    } else if density > 0.3 || colloquial >= 1 {
        2
    } else if density > 0.15 {
        3
    } else if contractions > 0 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Contractions: {contractions} | Colloquial markers: {colloquial}"),
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
    fn casual_voice_scores_human() {
        let s = run("Honestly, we're not gonna make it, and that's okay. It isn't a big deal.");
        assert_eq!(s.score, 1, "{}", s.detail);
    }

    #[test]
    fn formal_prose_scores_ai() {
        let s = run(
            "The committee convened to review the proposal. Members deliberated \
             at length before reaching a consensus on the matter.",
        );
        assert_eq!(s.score, 5, "{}", s.detail);
    }

    #[test]
    fn sparse_contractions_score_mid() {
        let s = run(
            "The report doesn't cover the second quarter. Analysts expect revisions. \
             Results remain preliminary. Further review continues. Final figures \
             arrive next month. Stakeholders await the outcome.",
        );
        assert_eq!(s.score, 3, "{}", s.detail);
    }
}
