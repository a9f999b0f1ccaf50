//! Signal 13: Verb Tense Consistency.
//!
//! Humans shift tense mid-text; generators hold one tense with near-total
//! discipline. Each sentence is labelled past, present, or mixed by a
//! case-sensitive verb sweep, then the dominant label's share is scored.
//!
//! Distribution tracking preserves first-occurrence order so the detail
//! string is stable across runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;

const SIGNAL_ID: u8 = 13;
const NAME: &str = "Verb Tense Consistency";

static PAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(was|were|had|did|\w+ed)\b").expect("past tense pattern"));

static PRESENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(is|are|has|does|do)\b").expect("present tense pattern"));

pub fn evaluate(
    _text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let labels: Vec<&'static str> = sentences
        .iter()
        .map(|s| {
            let past = PAST.find_iter(s).count();
            let present = PRESENT.find_iter(s).count();
            if past > present {
                "past"
            } else if present > past {
                "present"
            } else {
                "mixed"
            }
        })
        .collect();

    if labels.is_empty() {
        return SignalScore::ambiguous(SIGNAL_ID, NAME, "Could not determine tenses.");
    }

    let mut distribution: Vec<(&'static str, usize)> = Vec::new();
    for label in &labels {
        match distribution.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => distribution.push((label, 1)),
        }
    }

    let dominant = distribution
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);
    let dominant_ratio = dominant as f64 / labels.len() as f64;
    let has_shift = distribution.len() > 1;

    let mut examples = Vec::new();
    if dominant_ratio > 0.9 {
        examples.push(format!(
            "Rigid tense: {}% sentences in same tense",
            (dominant_ratio * 100.0).round() as i64
        ));
    }

    let score = if dominant_ratio < 0.65 && has_shift {
        1
    } else if dominant_ratio < 0.75 {
        2
    } else if dominant_ratio < 0.85 {
        3
    } else if dominant_ratio < 0.95 {
        4
    } else {
        5
    };

    let dist_str = distribution
        .iter()
        .map(|(label, count)| format!("\"{label}\":{count}"))
        .collect::<Vec<_>>()
        .join(",");

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Dominant tense ratio: {}% | Distribution: {{{dist_str}}}",
            (dominant_ratio * 100.0).round() as i64
        ),
        examples,
    }
}
