//! Signal 5: Pronominal Frequency.
//!
//! First-person pronouns signal a human author behind the text; impersonal
//! constructions ("it is", "there are") in their absence signal generation.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::word_lists::FIRST_PERSON_PRONOUNS;

const SIGNAL_ID: u8 = 5;
const NAME: &str = "Pronominal Frequency";

static IMPERSONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(it is|there are|there is|one might|one can|one should|it has been)\b")
        .expect("impersonal construction pattern is valid")
});

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let first_person = words
        .iter()
        .filter(|w| FIRST_PERSON_PRONOUNS.contains(&w.as_str()))
        .count();
    let impersonal = IMPERSONAL.find_iter(&text.to_lowercase()).count();
    let total = words.len();
    let fp_ratio = first_person as f64 / total.max(1) as f64 * 100.0;

    let mut examples = Vec::new();
    if fp_ratio < 0.5 && total > 100 {
        examples.push("No first-person pronouns in 100+ word text".to_string());
    }
    if impersonal > 3 {
        examples.push(format!(
            "{impersonal} impersonal constructions (\"it is\", \"there are\")"
        ));
    }

    let score = if fp_ratio > 2.0 && impersonal <= 1 {
        1
    } else if fp_ratio > 1.0 || impersonal <= 2 {
        2
    } else if fp_ratio > 0.5 {
        3
    } else if fp_ratio > 0.0 || impersonal <= 4 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("First-person: {fp_ratio:.1}% | Impersonal constructions: {impersonal}"),
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize_words;

    fn run(text: &str) -> SignalScore {
        let words = tokenize_words(text);
        evaluate(text, &words, &words, &[])
    }

    #[test]
    fn personal_voice_scores_human() {
        let s = run("I told my sister we should leave, and honestly I regret nothing.");
        assert_eq!(s.score, 1, "{}", s.detail);
    }

    #[test]
    fn impersonal_constructions_score_ai() {
        let s = run(
            "It is known that there are limits. It is clear that there is more. \
             It has been argued that one might object, and one can see why, yet \
             one should remain cautious because it is settled.",
        );
        assert_eq!(s.score, 5, "{}", s.detail);
        assert!(s.examples.iter().any(|e| e.contains("impersonal")));
    }

    #[test]
    fn neutral_text_without_pronouns_leans_ai() {
        let s = run("The bridge spans the river near the old mill district.");
        assert!(s.score >= 2, "{}", s.detail);
    }
}
