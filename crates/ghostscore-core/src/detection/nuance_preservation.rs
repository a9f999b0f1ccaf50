//! Signal 18: Nuance Preservation.
//!
//! Humans take positions and carve out specific exceptions. Generators
//! hedge with symmetric "on the one hand" balance and commit to nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 18;
const NAME: &str = "Nuance Preservation";

static FALSE_BALANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(on (the )?one hand|on the other hand|there are (both )?pros and cons|advantages and disadvantages|benefits and drawbacks)",
    )
    .expect("false balance pattern is valid")
});

static STRONG_POSITIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(i (believe|think|argue|contend)|clearly wrong|clearly right|without (a )?doubt|the best approach|the worst|undeniably)\b",
    )
    .expect("strong position pattern is valid")
});

static CAVEATS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(except when|unless|but only if|this (doesn't|won't) work (if|when)|the exception is|it depends on)\b",
    )
    .expect("caveat pattern is valid")
});

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let lower = text.to_lowercase();
    let false_balance = FALSE_BALANCE.find_iter(&lower).count();
    let strong = STRONG_POSITIONS.find_iter(&lower).count();
    let caveats = CAVEATS.find_iter(&lower).count();

    let mut examples = Vec::new();
    if false_balance >= 2 {
        examples.push(format!("{false_balance} false-balance patterns"));
    }
    if strong == 0 && text::tokenize_sentences(text).len() > 5 {
        examples.push("No strong positions taken".to_string());
    }

    let score = if caveats >= 2 && strong >= 1 {
        1
    } else if caveats >= 1 || strong >= 1 {
        2
    } else if false_balance <= 1 {
        3
    } else if false_balance <= 2 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "False balance: {false_balance} | Strong positions: {strong} | Specific caveats: {caveats}"
        ),
        examples,
    }
}
