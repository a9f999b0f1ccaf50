//! Report types for authorship detection.
//!
//! All externally visible structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for CLI JSON output and downstream consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of a single signal evaluator, before weighting is attached.
///
/// Evaluators never fail: when the sample is too small for their statistic
/// they return the ambiguous score 3 with a detail explaining the shortfall.
#[derive(Debug, Clone)]
pub struct SignalScore {
    /// Stable signal identity, 1–21. Never reordered.
    pub signal_id: u8,
    /// Fixed human-readable label for this signal.
    pub name: &'static str,
    /// 1 = strongly human-like, 5 = strongly AI-like.
    pub score: u8,
    /// Diagnostic summary including the raw statistic, for auditability.
    pub detail: String,
    /// Up to five literal snippets or descriptions evidencing the score.
    pub examples: Vec<String>,
}

impl SignalScore {
    /// Neutral result for samples too small to measure.
    pub(crate) fn ambiguous(signal_id: u8, name: &'static str, detail: &str) -> Self {
        Self {
            signal_id,
            name,
            score: 3,
            detail: detail.to_string(),
            examples: Vec::new(),
        }
    }
}

/// A signal score with its aggregation weight attached.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SignalReport {
    /// Stable signal identity, 1–21.
    pub signal_id: u8,
    /// Fixed human-readable label.
    pub name: String,
    /// 1 = strongly human-like, 5 = strongly AI-like.
    pub score: u8,
    /// Fixed integer multiplier (1–3) from the weight table.
    pub weight: u8,
    /// Diagnostic summary including the raw statistic.
    pub detail: String,
    /// Evidence snippets, possibly empty.
    pub examples: Vec<String>,
}

/// Composite risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    /// Composite ≤ 2.0.
    Low,
    /// Composite in (2.0, 3.2].
    Moderate,
    /// Composite > 3.2.
    High,
}

impl RiskLevel {
    /// Label as displayed to users.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate result of one detection run.
///
/// A pure output value: recomputed fresh per call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectionReport {
    /// Weighted mean of all signal scores, rounded to 2 decimals.
    pub composite_score: f64,
    /// Tier derived from `composite_score` alone.
    pub risk_level: RiskLevel,
    /// All 21 signals in fixed id order.
    pub signals: Vec<SignalReport>,
    /// Word count from the shared tokenizer.
    pub word_count: usize,
    /// Sentence count from the shared tokenizer.
    pub sentence_count: usize,
    /// Paragraph count from the shared tokenizer.
    pub paragraph_count: usize,
}
