//! Signal 12: Rhetorical Question Ratio.
//!
//! A few genuine questions read as human; formulaic self-answering
//! questions ("But what does this mean?") read as generated filler.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;

const SIGNAL_ID: u8 = 12;
const NAME: &str = "Rhetorical Question Ratio";

static FORMULAIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(but (what|how) does this|but is this really|what does this mean|why does this matter)")
        .expect("formulaic question pattern is valid")
});

pub fn evaluate(
    _text: &str,
    sentences: &[String],
    _words: &[String],
    _paragraphs: &[String],
) -> SignalScore {
    let questions: Vec<&String> = sentences
        .iter()
        .filter(|s| s.trim_end().ends_with('?'))
        .collect();
    let formulaic: Vec<&&String> = questions
        .iter()
        .filter(|q| FORMULAIC.is_match(q))
        .collect();

    let examples: Vec<String> = formulaic
        .iter()
        .take(3)
        .map(|q| {
            let preview: String = q.chars().take(60).collect();
            format!("Formulaic question: \"{preview}...\"")
        })
        .collect();

    let score = if (1..=3).contains(&questions.len()) && formulaic.is_empty() {
        1
    } else if !questions.is_empty() && formulaic.is_empty() {
        2
    } else if questions.is_empty() && sentences.len() < 10 {
        3
    } else if questions.is_empty() {
        4
    } else if formulaic.is_empty() {
        3
    } else {
        4
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!(
            "Rhetorical questions: {} | Formulaic: {}",
            questions.len(),
            formulaic.len()
        ),
        examples,
    }
}
