//! Text tokenization.
//!
//! Word, sentence, and paragraph splitting shared by every signal evaluator
//! and the secondary analyzers. All three functions are pure and
//! deterministic; inconsistent tokenization between evaluators would skew
//! scoring, so nothing in this crate tokenizes on its own.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase word runs, with at most one internal apostrophe ("don't").
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+'?[a-z]*").expect("valid regex"));

/// One-or-more blank lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Extract lowercase words from text.
///
/// Numbers and punctuation-only tokens are dropped entirely; contractions
/// stay whole. Text with no alphabetic content yields an empty vector.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences.
///
/// A boundary is any `.`, `!`, or `?` immediately followed by whitespace;
/// the terminator stays attached to the preceding sentence. Abbreviations
/// are NOT special-cased ("Dr. Smith" splits) — the scoring thresholds were
/// calibrated against this splitter, so it must stay naive.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().is_some_and(|c| c.is_whitespace()) {
            flush(&mut sentences, &mut current);
        }
    }
    flush(&mut sentences, &mut current);

    sentences
}

/// Split text into paragraphs separated by blank lines.
pub fn paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
