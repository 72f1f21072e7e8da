use std::path::Path;

use greeninvest_types::{ScoringMethod, SentimentResult};

use super::{KeywordScorer, LexiconScorer, SentimentScorer, VaderLexicon};

/// ESG sentiment analyzer.
///
/// The scorer is chosen once: the lexicon scorer when a lexicon is available,
/// the keyword fallback otherwise.
pub struct EsgAnalyzer {
    scorer: Box<dyn SentimentScorer>,
    method: ScoringMethod,
}

impl Default for EsgAnalyzer {
    fn default() -> Self {
        Self::keyword_fallback()
    }
}

impl std::fmt::Debug for EsgAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsgAnalyzer")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl EsgAnalyzer {
    /// Load the lexicon at `path`, falling back to keyword scoring with a warning.
    pub fn from_lexicon_path(path: &Path) -> Self {
        match VaderLexicon::load(path) {
            Ok(lexicon) => {
                tracing::debug!(path = %path.display(), entries = lexicon.len(), "loaded sentiment lexicon");
                Self::with_lexicon(lexicon)
            }
            Err(e) => {
                tracing::warn!(error = %e, "sentiment lexicon not available; using fallback sentiment analysis");
                Self::keyword_fallback()
            }
        }
    }

    /// Analyzer backed by an already loaded lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: VaderLexicon) -> Self {
        Self {
            scorer: Box::new(LexiconScorer::new(lexicon)),
            method: ScoringMethod::Lexicon,
        }
    }

    /// Analyzer that only uses keyword overlap.
    #[must_use]
    pub fn keyword_fallback() -> Self {
        Self {
            scorer: Box::new(KeywordScorer),
            method: ScoringMethod::KeywordFallback,
        }
    }

    /// Scoring method used for non-empty text.
    #[must_use]
    pub const fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Score ESG report text.
    ///
    /// Empty or whitespace-only text yields the neutral result (score 0.5). A
    /// scorer producing a non-finite score is logged and degraded to neutral.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::neutral();
        }
        let result = self.scorer.score(text);
        if !result.score.is_finite() || !result.breakdown.compound.is_finite() {
            tracing::warn!(method = ?self.method, "error during sentiment analysis; returning neutral score");
            return SentimentResult::neutral();
        }
        SentimentResult {
            score: result.score.clamp(0.0, 1.0),
            ..result
        }
    }
}
