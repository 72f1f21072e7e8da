//! Sentiment scoring for ESG report text.
//!
//! Two scorers implement [`SentimentScorer`]:
//! - [`LexiconScorer`]: VADER-style valence scoring over a pretrained lexicon file.
//! - [`KeywordScorer`]: positive/negative keyword overlap, used when no lexicon loads.
//!
//! [`EsgAnalyzer`] picks between them once at construction and maps the
//! resulting polarity onto a [0, 1] ESG score.

mod analyzer;
mod keywords;
mod lexicon;

pub use analyzer::EsgAnalyzer;
pub use keywords::{KeywordScorer, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, keyword_ratio};
pub use lexicon::{LexiconScorer, VaderLexicon};

use greeninvest_types::SentimentResult;

/// A scorer that maps non-empty text to an ESG sentiment result.
pub trait SentimentScorer: Send + Sync {
    /// Score `text`. Callers handle empty input before reaching the scorer.
    fn score(&self, text: &str) -> SentimentResult;
}
