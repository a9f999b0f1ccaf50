//! Signal 9: Sentence Complexity Jitter.
//!
//! Clause-count variance across sentences. Humans mix bare five-word
//! statements with four-clause ramblers; generators hover in between.
//!
//! Clause markers are matched case-sensitively against the raw sentence,
//! so sentence-initial "And"/"But" do not count. Frozen calibration.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 9;
const NAME: &str = "Sentence Complexity Jitter";

static CLAUSE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;]|\band\b|\bbut\b|\bor\b|\bwhile\b|\balthough\b|\bbecause\b")
        .expect("clause marker pattern is valid")
});

pub fn evaluate(
    _text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    if sentences.len() < 3 {
        return SignalScore::ambiguous(
            SIGNAL_ID,
            NAME,
            "Too few sentences for complexity analysis.",
        );
    }

    let complexities: Vec<f64> = sentences
        .iter()
        .map(|s| CLAUSE_MARKERS.find_iter(s).count() as f64 + 1.0)
        .collect();
    let std = super::std_dev(&complexities);

    let has_simple = complexities
        .iter()
        .zip(sentences)
        .any(|(&c, s)| c == 1.0 && text::tokenize_words(s).len() < 6);
    let has_complex = complexities.iter().any(|&c| c >= 4.0);

    let mut examples = Vec::new();
    if !has_simple {
        examples.push("No very simple sentences (< 6 words, single clause)".to_string());
    }
    if !has_complex {
        examples.push("No complex multi-clause sentences".to_string());
    }

    let score = if std > 1.5 && has_simple && has_complex {
        1
    } else if std > 1.2 || (has_simple && has_complex) {
        2
    } else if std > 0.9 {
        3
    } else if std > 0.6 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Complexity StdDev: {std:.2} | Simple sentences: {has_simple} | Complex: {has_complex}"
        ),
        examples,
    }
}
