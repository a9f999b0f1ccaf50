//! Signal 16: Formatting Logic Consistency.
//!
//! Generated articles favor rigid scaffolding: headers every few
//! paragraphs, bullets everywhere, paragraphs of near-identical length.
//! Human structure is lumpier.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::SignalScore;
use crate::text;

const SIGNAL_ID: u8 = 16;
const NAME: &str = "Formatting Logic Consistency";

static HEADERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+.+").expect("header pattern is valid"));

static BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)\s*[-•*]\s+").expect("bullet pattern is valid"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)\s*\d+[.)]\s+").expect("numbered item pattern is valid"));

pub fn evaluate(
    text: &str,
    _sentences: &[String],
    _words: &[String],
    paragraphs: &[String],
) -> SignalScore {
    let headers = HEADERS.find_iter(text).count();
    let bullets = BULLETS.find_iter(text).count();
    let numbered = NUMBERED.find_iter(text).count();

    let para_lengths: Vec<f64> = paragraphs
        .iter()
        .filter(|p| !p.starts_with('#'))
        .map(|p| text::tokenize_words(p).len() as f64)
        .collect();
    let para_std = if para_lengths.len() >= 3 {
        super::std_dev(&para_lengths)
    } else {
        0.0
    };

    let highly_structured = headers >= 3 && (bullets >= 3 || numbered >= 3);

    let mut examples = Vec::new();
    if highly_structured {
        examples.push(format!(
            "Highly structured: {headers} headers, {bullets} bullets"
        ));
    }
    if para_std < 15.0 && para_lengths.len() >= 3 {
        examples.push(format!(
            "Paragraph lengths very uniform (StdDev: {para_std:.0})"
        ));
    }

    let score = if para_std > 40.0 && !highly_structured {
        1
    } else if para_std > 25.0 || !highly_structured {
        2
    } else if para_std > 15.0 {
        3
    } else if highly_structured {
        4
    } else {
        5
    };

    SignalScore {
        signal_id: SIGNAL_ID,
        name: NAME,
        score,
        detail: format!("Headers: {headers} | Bullets: {bullets} | Para length StdDev: {para_std:.0}"),
        examples,
    }
}
