//! Signal 2: Syntactic Burstiness.
//!
//! Human prose alternates short and long sentences; generated prose tends
//! to settle into a narrow length band. Measured as the population standard
//! deviation of per-sentence word counts.

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 2;
const NAME: &str = "Syntactic Burstiness";

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
            "Too few sentences for burstiness analysis.",
        );
    }

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| text::tokenize_words(s).len() as f64)
        .collect();
    let avg = super::mean(&lengths);
    let std = super::std_dev(&lengths);
    let min = lengths.iter().copied().fold(f64::INFINITY, f64::min) as usize;
    let max = lengths.iter().copied().fold(0.0_f64, f64::max) as usize;

    let mut examples = Vec::new();
    if std < 7.0 {
        let mut sorted: Vec<usize> = lengths.iter().map(|&l| l as usize).collect();
        sorted.sort_unstable();
        let preview: Vec<usize> = sorted.into_iter().take(10).collect();
        examples.push(format!("Sentence lengths cluster narrowly: {preview:?}"));
    }

    let score = if std > 12.0 {
        1
    } else if std > 9.0 {
        2
    } else if std > 7.0 {
        3
    } else if std > 5.0 {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("StdDev: {std:.1} | Range: {min}–{max} words | Avg: {avg:.1}"),
        examples,
    }
}
