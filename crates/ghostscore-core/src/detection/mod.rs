//! AI-authorship detection.
//!
//! Decomposes detection into 21 independent signal evaluators, orchestrated
//! by [`analyze`]. Each evaluator is a pure function in its own module,
//! scoring one linguistic property 1–5 (1 = human-like, 5 = AI-like).
//!
//! Evaluators are weight-free; [`analyze`] attaches the fixed weight table
//! and computes the composite score and risk tier.

pub mod adverbial_fluff;
pub mod burstiness;
pub mod cliche_density;
pub mod colon_leadin;
pub mod complexity_jitter;
pub mod emotional_variance;
pub mod formatting_consistency;
pub mod idiomatic_regionalism;
pub mod lexical_diversity;
pub mod metaphor_originality;
pub mod nuance_preservation;
pub mod passive_voice;
pub mod pattern_repetition;
pub mod perplexity_volatility;
pub mod prompt_leakage;
pub mod pronominal_frequency;
pub mod proper_noun_density;
pub mod rhetorical_questions;
pub mod semantic_drift;
pub mod tense_consistency;
pub mod transition_predictability;

use crate::report::{DetectionReport, SignalReport, SignalScore};
use crate::text;
use crate::weights::{risk_level, round2, signal_weight};

/// Common evaluator signature: (raw text, sentences, words, paragraphs).
type SignalFn = fn(&str, &[String], &[String], &[String]) -> SignalScore;

/// Evaluators in fixed signal-id order (1..=21).
///
/// Output ordering is a correctness requirement — downstream consumers
/// index signals positionally — not an implementation detail.
const SIGNAL_EVALUATORS: [SignalFn; 21] = [
    lexical_diversity::evaluate,
    burstiness::evaluate,
    semantic_drift::evaluate,
    pattern_repetition::evaluate,
    pronominal_frequency::evaluate,
    passive_voice::evaluate,
    idiomatic_regionalism::evaluate,
    transition_predictability::evaluate,
    complexity_jitter::evaluate,
    emotional_variance::evaluate,
    cliche_density::evaluate,
    rhetorical_questions::evaluate,
    tense_consistency::evaluate,
    adverbial_fluff::evaluate,
    proper_noun_density::evaluate,
    formatting_consistency::evaluate,
    metaphor_originality::evaluate,
    nuance_preservation::evaluate,
    prompt_leakage::evaluate,
    perplexity_volatility::evaluate,
    colon_leadin::evaluate,
];

/// Score a block of text across all 21 signals.
///
/// Total for every input: evaluators degrade to the ambiguous score 3 on
/// samples too small for their statistic, and an empty string still yields
/// a valid report with zero counts. Callers enforce any minimum-length
/// policy before calling (see [`crate::error::check_input`]).
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn analyze(input: &str) -> DetectionReport {
    let words = text::tokenize_words(input);
    let sentences = text::tokenize_sentences(input);
    let paragraphs = text::paragraphs(input);

    let mut signals = Vec::with_capacity(SIGNAL_EVALUATORS.len());
    let mut weighted_sum = 0u32;
    let mut total_weight = 0u32;

    for evaluate in SIGNAL_EVALUATORS {
        let score = evaluate(input, &sentences, &words, &paragraphs);
        let weight = signal_weight(score.signal_id);
        weighted_sum += u32::from(score.score) * u32::from(weight);
        total_weight += u32::from(weight);
        signals.push(SignalReport {
            signal_id: score.signal_id,
            name: score.name.to_string(),
            score: score.score,
            weight,
            detail: score.detail,
            examples: score.examples,
        });
    }

    let composite_score = if total_weight > 0 {
        round2(f64::from(weighted_sum) / f64::from(total_weight))
    } else {
        0.0
    };

    DetectionReport {
        composite_score,
        risk_level: risk_level(composite_score),
        signals,
        word_count: words.len(),
        sentence_count: sentences.len(),
        paragraph_count: paragraphs.len(),
    }
}

/// Arithmetic mean; 0 for empty input.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for empty input.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RiskLevel;

    #[test]
    fn analysis_is_deterministic() {
        let text = "The results surprised everyone. Furthermore, the team had doubts. \
                    I think we got lucky, honestly!";
        let a = analyze(text);
        let b = analyze(text);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn all_signals_present_in_id_order() {
        let report = analyze("Some ordinary text about gardens. It rained all week.");
        assert_eq!(report.signals.len(), 21);
        for (i, signal) in report.signals.iter().enumerate() {
            assert_eq!(signal.signal_id as usize, i + 1);
            assert!((1..=5).contains(&signal.score));
            assert!((1..=3).contains(&signal.weight));
        }
    }

    #[test]
    fn composite_matches_weighted_mean() {
        let report = analyze(
            "Writing is hard. Some days the words come easily, other days they don't. \
             I keep a notebook anyway because momentum beats inspiration.",
        );
        let weighted: u32 = report
            .signals
            .iter()
            .map(|s| u32::from(s.score) * u32::from(s.weight))
            .sum();
        let total: u32 = report.signals.iter().map(|s| u32::from(s.weight)).sum();
        let expected = round2(f64::from(weighted) / f64::from(total));
        assert_eq!(report.composite_score, expected);
        assert!((1.0..=5.0).contains(&report.composite_score));
    }

    #[test]
    fn empty_input_yields_valid_report() {
        let report = analyze("");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.paragraph_count, 0);
        assert_eq!(report.signals.len(), 21);
        for signal in &report.signals {
            assert!((1..=5).contains(&signal.score));
        }
    }

    #[test]
    fn whitespace_only_input_yields_valid_report() {
        let report = analyze("   \n\n\t  ");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentence_count, 0);
    }

    #[test]
    fn ten_words_never_panics_and_mostly_defaults() {
        let report = analyze("one two three four five six seven eight nine ten");
        assert_eq!(report.word_count, 10);
        // Signals with explicit sample minimums must sit at the neutral 3.
        for id in [1u8, 2, 3, 4, 9] {
            let s = &report.signals[usize::from(id) - 1];
            assert_eq!(s.score, 3, "signal {id} should default on tiny input");
        }
    }

    #[test]
    fn generated_sounding_text_flags_transitions_cliches_not_passive() {
        let text = "AI has revolutionized the industry. Furthermore, it has transformed \
                    how businesses operate. Moreover, it is worth noting that this \
                    comprehensive shift continues.";
        let report = analyze(text);

        let transitions = &report.signals[7];
        assert_eq!(transitions.signal_id, 8);
        assert_eq!(transitions.score, 4, "{}", transitions.detail);

        let cliches = &report.signals[10];
        assert_eq!(cliches.signal_id, 11);
        assert!(cliches.score >= 3, "{}", cliches.detail);

        let passive = &report.signals[5];
        assert_eq!(passive.signal_id, 6);
        assert_eq!(passive.score, 1, "{}", passive.detail);
    }

    #[test]
    fn personal_bursty_text_scores_human_on_voice_signals() {
        let text = "I think it rained.\n\n\
            I think the storm that rolled through the valley last night knocked the \
            power out for six hours and nobody on our street seemed to mind at all, \
            which surprised me!\n\n\
            I think we don't need umbrellas here.\n\n\
            I think my neighbor Marta, who can't stand wet shoes, finally bought the \
            rain boots she kept talking about for two years.\n\n\
            I think the kids splashed in puddles until dark and loved every minute.";
        let report = analyze(text);

        let burstiness = &report.signals[1];
        assert_eq!(burstiness.signal_id, 2);
        assert!(burstiness.score <= 3, "{}", burstiness.detail);

        let pronominal = &report.signals[4];
        assert_eq!(pronominal.signal_id, 5);
        assert!(pronominal.score <= 2, "{}", pronominal.detail);
    }

    #[test]
    fn risk_level_follows_composite() {
        let report = analyze("Plain short text. Nothing remarkable here at all.");
        let expected = match report.composite_score {
            c if c <= 2.0 => RiskLevel::Low,
            c if c <= 3.2 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        };
        assert_eq!(report.risk_level, expected);
    }
}
