//! Content-quality scoring.
//!
//! Independent of authorship detection: measures how well a draft reads as
//! web content. Three sub-analyzers (readability, structure, completeness)
//! each produce a 0–100 score; the composite weighs them 30/35/35.

pub mod completeness;
pub mod readability;
pub mod structure;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use completeness::CompletenessReport;
pub use readability::ReadabilityReport;
pub use structure::StructureReport;

/// Content category, used to pick word-count targets for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentType {
    /// Standard blog article (1200–2500 words).
    BlogPost,
    /// Product review (1000–2000 words).
    ProductReview,
    /// Step-by-step guide (1500–3000 words).
    HowToGuide,
    /// List-format article (800–2000 words).
    Listicle,
    /// Comparison piece (1500–3000 words).
    Comparison,
    /// News article (500–1200 words).
    NewsArticle,
}

impl ContentType {
    /// Returns the content type as a kebab-case tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlogPost => "blog-post",
            Self::ProductReview => "product-review",
            Self::HowToGuide => "how-to-guide",
            Self::Listicle => "listicle",
            Self::Comparison => "comparison",
            Self::NewsArticle => "news-article",
        }
    }

    /// Word-count target range (min, max) for this content type.
    pub const fn word_targets(&self) -> (usize, usize) {
        match self {
            Self::BlogPost => (1200, 2500),
            Self::ProductReview => (1000, 2000),
            Self::HowToGuide | Self::Comparison => (1500, 3000),
            Self::Listicle => (800, 2000),
            Self::NewsArticle => (500, 1200),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word-count targets when no content type is specified.
pub(crate) const DEFAULT_WORD_TARGETS: (usize, usize) = (1000, 2500);

/// Aggregate content-quality result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityReport {
    /// Weighted composite: readability 30%, structure 35%, completeness 35%.
    pub score: u32,
    /// Readability sub-report.
    pub readability: ReadabilityReport,
    /// Structure sub-report.
    pub structure: StructureReport,
    /// Completeness sub-report.
    pub completeness: CompletenessReport,
}

/// Score a draft's overall content quality.
#[tracing::instrument(skip(text), fields(text_len = text.len(), content_type = ?content_type))]
pub fn analyze_quality(text: &str, content_type: Option<ContentType>) -> QualityReport {
    let readability = readability::analyze_readability(text);
    let structure = structure::analyze_structure(text);
    let completeness = completeness::analyze_completeness(text, content_type);

    let score = (f64::from(readability.score) * 0.3
        + f64::from(structure.score) * 0.35
        + f64::from(completeness.score) * 0.35)
        .round() as u32;

    QualityReport {
        score,
        readability,
        structure,
        completeness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_is_weighted_mean_of_parts() {
        let text = "## Heading\n\nA plain paragraph sits here with enough words to \
                    register. Another sentence follows it for balance.";
        let report = analyze_quality(text, Some(ContentType::NewsArticle));
        let expected = (f64::from(report.readability.score) * 0.3
            + f64::from(report.structure.score) * 0.35
            + f64::from(report.completeness.score) * 0.35)
            .round() as u32;
        assert_eq!(report.score, expected);
        assert!(report.score <= 100);
    }

    #[test]
    fn content_type_tags_round_trip() {
        for ct in [
            ContentType::BlogPost,
            ContentType::ProductReview,
            ContentType::HowToGuide,
            ContentType::Listicle,
            ContentType::Comparison,
            ContentType::NewsArticle,
        ] {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
            let back: ContentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ct);
        }
    }

    #[test]
    fn word_targets_match_calibration() {
        assert_eq!(ContentType::BlogPost.word_targets(), (1200, 2500));
        assert_eq!(ContentType::NewsArticle.word_targets(), (500, 1200));
        assert_eq!(ContentType::HowToGuide.word_targets(), (1500, 3000));
    }
}
