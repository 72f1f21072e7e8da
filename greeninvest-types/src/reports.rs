//! Report envelopes produced by the dashboard.

use serde::Serialize;

use crate::error::GreenInvestError;
use crate::metrics::MetricSet;
use crate::price::PriceSeries;
use crate::ticker::Ticker;

/// Summary of a financial metrics retrieval.
///
/// Carries the requested `ticker`, the resolved metrics (empty when the
/// provider failed), and any non-fatal warnings encountered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Requested ticker.
    pub ticker: Ticker,
    /// Metric snapshot; empty on provider failure.
    pub metrics: MetricSet,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<GreenInvestError>,
}

/// Summary of a price history retrieval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    /// Closing prices; empty on provider failure.
    pub series: PriceSeries,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<GreenInvestError>,
}
