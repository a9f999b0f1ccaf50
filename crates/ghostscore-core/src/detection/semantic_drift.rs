//! Signal 3: Semantic Drift Monitor.
//!
//! Human writing drifts: paragraphs pick up tangents and drop threads.
//! Generated writing holds topic with unnatural discipline. Measured as
//! average keyword overlap between adjacent paragraphs, plus a sweep for
//! explicit tangent markers.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;
use crate::word_lists::DRIFT_STOPWORDS;

const SIGNAL_ID: u8 = 3;
const NAME: &str = "Semantic Drift Monitor";

static TANGENT_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"speaking of|reminds me|by the way|on a side note|funny enough|incidentally|tangent")
        .expect("tangent marker pattern is valid")
});

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    paragraphs: &[String],
) -> SignalScore {
    if paragraphs.len() < 2 {
        return SignalScore::ambiguous(
            SIGNAL_ID,
            NAME,
            "Single paragraph; drift analysis needs multiple paragraphs.",
        );
    }

    let keyword_sets: Vec<HashSet<String>> = paragraphs
        .iter()
        .map(|p| {
            text::tokenize_words(p)
                .into_iter()
                .filter(|w| !DRIFT_STOPWORDS.contains(w.as_str()))
                .collect()
        })
        .collect();

    let mut overlaps = Vec::new();
    for pair in keyword_sets.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.is_empty() || b.is_empty() {
            continue;
        }
        let intersection = a.intersection(b).count();
        let union = a.union(b).count();
        overlaps.push(intersection as f64 / union.max(1) as f64);
    }

    let avg_overlap = if overlaps.is_empty() {
        0.5
    } else {
        overlaps.iter().sum::<f64>() / overlaps.len() as f64
    };

    let tangents = TANGENT_MARKERS.find_iter(&text.to_lowercase()).count();

    let mut examples = Vec::new();
    if avg_overlap > 0.3 {
        examples.push(format!(
            "High keyword overlap between paragraphs ({avg_overlap:.2})"
        ));
    }

    let score = if avg_overlap < 0.15 || tangents >= 2 {
        1
    } else if avg_overlap < 0.22 || tangents >= 1 {
        2
    } else if avg_overlap < 0.3 {
        3
    } else if avg_overlap < 0.4 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Avg keyword overlap: {avg_overlap:.3} | Tangent markers: {tangents}"),
        examples,
    }
}
