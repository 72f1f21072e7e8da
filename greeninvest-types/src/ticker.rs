use serde::{Deserialize, Serialize};

use crate::error::GreenInvestError;

/// Normalized exchange ticker symbol (e.g. `AAPL`, `BRK-B`, `^GSPC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse a user-supplied symbol, trimming whitespace and upper-casing it.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is empty or contains characters outside
    /// `A-Z`, `0-9`, `.`, `-`, `^`, `=`.
    pub fn parse(raw: &str) -> Result<Self, GreenInvestError> {
        let s = raw.trim().to_ascii_uppercase();
        if s.is_empty() {
            return Err(GreenInvestError::InvalidArg("ticker must not be empty".into()));
        }
        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(GreenInvestError::InvalidArg(format!(
                "ticker {s:?} contains invalid character {bad:?}"
            )));
        }
        Ok(Self(s))
    }

    /// Returns the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ticker {
    type Err = GreenInvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = GreenInvestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}
