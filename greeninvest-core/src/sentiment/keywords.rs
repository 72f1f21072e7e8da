use std::collections::HashSet;

use greeninvest_types::{NEUTRAL_SCORE, ScoringMethod, SentimentBreakdown, SentimentResult};

use super::SentimentScorer;

/// Words counted as positive ESG signals.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "positive",
    "excellent",
    "sustainable",
    "ethical",
    "responsible",
    "green",
    "efficient",
    "improvement",
    "innovative",
];

/// Words counted as negative ESG signals.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "poor",
    "negative",
    "unethical",
    "unsustainable",
    "violation",
    "risk",
    "penalty",
    "scandal",
    "inefficient",
];

/// Ratio of distinct positive keywords to all distinct matched keywords.
///
/// Words are maximal runs of alphanumerics and `_` in the lower-cased text;
/// each distinct word counts once. Returns 0.5 when no keyword matches.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn keyword_ratio(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect();

    let pos = POSITIVE_KEYWORDS
        .iter()
        .filter(|k| words.contains(*k))
        .count();
    let neg = NEGATIVE_KEYWORDS
        .iter()
        .filter(|k| words.contains(*k))
        .count();
    let total = pos + neg;
    if total == 0 {
        return NEUTRAL_SCORE;
    }
    pos as f64 / total as f64
}

/// Keyword-overlap scorer used when the lexicon is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> SentimentResult {
        let s = keyword_ratio(text);
        SentimentResult {
            score: s,
            breakdown: SentimentBreakdown {
                compound: s.mul_add(2.0, -1.0),
                pos: s,
                neu: 0.0,
                neg: 1.0 - s,
            },
            method: ScoringMethod::KeywordFallback,
        }
    }
}
