//! Financial metric snapshot with parallel raw and display mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display string used for any metric whose value is unavailable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Financial metrics surfaced by the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Metric {
    /// Market capitalization.
    MarketCap,
    /// Trailing price/earnings ratio.
    PeRatio,
    /// Year-over-year revenue growth (fraction).
    RevenueGrowth,
    /// Net profit margin (fraction).
    ProfitMargin,
    /// Operating margin (fraction).
    OperatingMargin,
    /// Return on equity (fraction).
    ReturnOnEquity,
    /// Trailing total revenue.
    TotalRevenue,
    /// Debt to equity ratio.
    DebtToEquity,
    /// Current ratio.
    CurrentRatio,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Self; 9] = [
        Self::MarketCap,
        Self::PeRatio,
        Self::RevenueGrowth,
        Self::ProfitMargin,
        Self::OperatingMargin,
        Self::ReturnOnEquity,
        Self::TotalRevenue,
        Self::DebtToEquity,
        Self::CurrentRatio,
    ];

    /// Human-readable metric name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MarketCap => "Market Cap",
            Self::PeRatio => "P/E Ratio",
            Self::RevenueGrowth => "Revenue Growth",
            Self::ProfitMargin => "Profit Margin",
            Self::OperatingMargin => "Operating Margin",
            Self::ReturnOnEquity => "Return on Equity",
            Self::TotalRevenue => "Total Revenue",
            Self::DebtToEquity => "Debt to Equity",
            Self::CurrentRatio => "Current Ratio",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a metric value for display, choosing the style from the metric name.
///
/// Names mentioning `Margin`, `Growth`, `Return` or `Yield` are fractions and
/// render as percentages. Otherwise names mentioning `Cap` or `Revenue` render
/// as scaled dollar amounts. Anything else renders with two decimals. Missing
/// or non-finite values render as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_metric(name: &str, value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    if ["Margin", "Growth", "Return", "Yield"]
        .iter()
        .any(|k| name.contains(k))
    {
        format!("{:.2}%", v * 100.0)
    } else if name.contains("Cap") || name.contains("Revenue") {
        format_currency(v)
    } else {
        format!("{v:.2}")
    }
}

fn format_currency(v: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    for (scale, suffix) in SCALES {
        if abs >= scale {
            return format!("{sign}${:.2}{suffix}", abs / scale);
        }
    }
    format!("{sign}${abs:.2}")
}

/// Raw metric values and their formatted display strings.
///
/// Both mappings are written together by [`MetricSet::insert`], so every raw
/// key always has a formatted counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSet {
    raw: BTreeMap<Metric, Option<f64>>,
    formatted: BTreeMap<Metric, String>,
}

impl MetricSet {
    /// An empty snapshot; the degraded value when a provider fails.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            raw: BTreeMap::new(),
            formatted: BTreeMap::new(),
        }
    }

    /// Build a snapshot from `(metric, value)` pairs.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Metric, Option<f64>)>,
    {
        let mut set = Self::empty();
        for (metric, value) in values {
            set.insert(metric, value);
        }
        set
    }

    /// Record a raw value and its formatted display string.
    pub fn insert(&mut self, metric: Metric, value: Option<f64>) {
        self.formatted
            .insert(metric, format_metric(metric.label(), value));
        self.raw.insert(metric, value);
    }

    /// Raw value for `metric`, if present and known.
    #[must_use]
    pub fn raw(&self, metric: Metric) -> Option<f64> {
        self.raw.get(&metric).copied().flatten()
    }

    /// Display string for `metric`; `"N/A"` when absent.
    #[must_use]
    pub fn formatted(&self, metric: Metric) -> &str {
        self.formatted
            .get(&metric)
            .map_or(NOT_AVAILABLE, String::as_str)
    }

    /// Full raw mapping.
    #[must_use]
    pub const fn raw_values(&self) -> &BTreeMap<Metric, Option<f64>> {
        &self.raw
    }

    /// Full formatted mapping.
    #[must_use]
    pub const fn formatted_values(&self) -> &BTreeMap<Metric, String> {
        &self.formatted
    }

    /// Iterate `(metric, display string)` in display order.
    pub fn iter_formatted(&self) -> impl Iterator<Item = (Metric, &str)> {
        self.formatted.iter().map(|(m, s)| (*m, s.as_str()))
    }

    /// Number of metrics recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// True if no metric was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
