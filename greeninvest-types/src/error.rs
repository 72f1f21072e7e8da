use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the greeninvest workspace.
///
/// This wraps argument validation errors, provider-tagged failures, not-found
/// conditions, lexicon loading problems, and session misuse.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GreenInvestError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "metrics").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "metrics for AAPL".
        what: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "metrics", "price_history").
        capability: String,
    },

    /// The sentiment lexicon could not be read or parsed.
    #[error("lexicon unavailable at {path}: {msg}")]
    Lexicon {
        /// Path the lexicon was expected at.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Local file I/O failed (report export, text input, config).
    #[error("i/o error on {path}: {msg}")]
    Io {
        /// Path being read or written.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A report was requested before any ESG analysis ran in the session.
    #[error("no ESG assessment available; run the ESG analysis first")]
    NoAssessment,
}

impl GreenInvestError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `Lexicon` error.
    pub fn lexicon(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Lexicon {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Io` error from a path and the underlying I/O failure.
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            msg: err.to_string(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are not actionable.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
