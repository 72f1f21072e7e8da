//! Sentiment scoring outputs.

use serde::{Deserialize, Serialize};

/// Score assigned when no sentiment signal is available.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Which scorer produced a [`SentimentResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ScoringMethod {
    /// Pretrained valence lexicon (VADER-style).
    Lexicon,
    /// Positive/negative keyword overlap ratio.
    KeywordFallback,
    /// No text to score; neutral default returned.
    NeutralDefault,
}

impl ScoringMethod {
    /// Short description used in reports.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Lexicon => "a pretrained lexicon-based sentiment model (VADER)",
            Self::KeywordFallback => "a keyword-overlap fallback scorer",
            Self::NeutralDefault => "a neutral default (no report text supplied)",
        }
    }
}

/// Polarity breakdown. `compound` lies in [-1, 1]; the proportions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Normalized overall polarity.
    pub compound: f64,
    /// Positive proportion.
    pub pos: f64,
    /// Neutral proportion.
    pub neu: f64,
    /// Negative proportion.
    pub neg: f64,
}

impl SentimentBreakdown {
    /// Breakdown reported alongside the neutral default score.
    ///
    /// `compound` is 0.5, matching the neutral score rather than the
    /// polarity midpoint.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            compound: 0.5,
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
        }
    }
}

/// ESG score in [0, 1] with the breakdown it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// ESG score in [0, 1]; 0.5 is neutral.
    pub score: f64,
    /// Polarity breakdown.
    pub breakdown: SentimentBreakdown,
    /// Scorer that produced the result.
    pub method: ScoringMethod,
}

impl SentimentResult {
    /// The neutral result returned for empty input or scoring failures.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            breakdown: SentimentBreakdown::neutral(),
            method: ScoringMethod::NeutralDefault,
        }
    }
}
