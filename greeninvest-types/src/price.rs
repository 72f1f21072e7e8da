//! Closing-price history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ticker::Ticker;

/// Lookback window for price history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HistoryRange {
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// One year.
    #[default]
    OneYear,
    /// Two years.
    TwoYears,
    /// Five years.
    FiveYears,
}

impl HistoryRange {
    /// Provider range token (`1mo`, `1y`, ...).
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
        }
    }

    /// Calendar days covered by the window.
    #[must_use]
    pub const fn lookback_days(self) -> i64 {
        match self {
            Self::OneMonth => 30,
            Self::ThreeMonths => 91,
            Self::SixMonths => 182,
            Self::OneYear => 365,
            Self::TwoYears => 730,
            Self::FiveYears => 1826,
        }
    }

    /// Human-readable label for chart titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "Last 1 Month",
            Self::ThreeMonths => "Last 3 Months",
            Self::SixMonths => "Last 6 Months",
            Self::OneYear => "Last 1 Year",
            Self::TwoYears => "Last 2 Years",
            Self::FiveYears => "Last 5 Years",
        }
    }
}

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Closing price.
    pub close: f64,
}

/// Ordered closing prices for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker the series belongs to.
    pub ticker: Ticker,
    /// Points sorted by ascending timestamp.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting points by timestamp and dropping non-finite closes.
    #[must_use]
    pub fn new(ticker: Ticker, mut points: Vec<PricePoint>) -> Self {
        points.retain(|p| p.close.is_finite());
        points.sort_by_key(|p| p.ts);
        Self { ticker, points }
    }

    /// An empty series; the degraded value when a provider fails.
    #[must_use]
    pub const fn empty(ticker: Ticker) -> Self {
        Self {
            ticker,
            points: Vec::new(),
        }
    }

    /// True if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }
}
