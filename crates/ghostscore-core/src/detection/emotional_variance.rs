//! Signal 10: Emotional Variance.
//!
//! Human writing carries affect in both directions plus hedges and humor.
//! Generated writing is tonally flat. Counts marker vocabulary and checks
//! whether the emotional range spans more than one register.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;

const SIGNAL_ID: u8 = 10;
const NAME: &str = "Emotional Variance";

static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(love|great|amazing|excellent|fantastic|wonderful|brilliant|excited|thrilled)\b")
        .expect("positive marker pattern is valid")
});

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(hate|terrible|awful|horrible|frustrating|annoying|painful|disappointing|angry|furious)\b",
    )
    .expect("negative marker pattern is valid")
});

static HEDGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(maybe|perhaps|probably|might|could be|not sure|i think|i guess|i feel)\b")
        .expect("hedge marker pattern is valid")
});

static HUMOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(haha|lol|funny|hilarious|joking|kidding|ironic)\b")
        .expect("humor marker pattern is valid")
});

pub fn evaluate(
    text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    let positive = POSITIVE.find_iter(&lower).count();
    let negative = NEGATIVE.find_iter(&lower).count();
    let hedges = HEDGE.find_iter(&lower).count();
    let humor = HUMOR.find_iter(&lower).count();

    // Punctuation carries affect too; both counts feed the total.
    let total = exclamations + questions + positive + negative + hedges + humor;
    let has_range =
        (positive > 0 && negative > 0) || (hedges > 0 && (positive > 0 || negative > 0));

    let mut examples = Vec::new();
    if total == 0 {
        examples.push("Zero emotional markers in entire text".to_string());
    }
    if !has_range && sentences.len() > 5 {
        examples.push("No emotional range — flat affect throughout".to_string());
    }

    let score = if has_range && total >= 5 {
        1
    } else if total >= 3 || has_range {
        2
    } else if total >= 1 {
        3
    } else if sentences.len() > 3 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Emotional markers: {total} | Range: {} | Exclamations: {exclamations}",
            if has_range { "yes" } else { "no" }
        ),
        examples,
    }
}
