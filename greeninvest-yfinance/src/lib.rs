//! greeninvest-yfinance
//!
//! Connector that implements `MarketDataConnector` for Yahoo Finance. Daily
//! closing prices come from the `yfinance-rs` history service; valuation
//! metrics come from the `quoteSummary` endpoint, which `yfinance-rs` does not
//! cover.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;
mod builder;
/// Wire shapes of the Yahoo payloads.
pub mod wire;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
#[cfg(not(feature = "test-adapters"))]
use adapter::RealAdapter;
use adapter::{YfHistory, YfSummary};
use async_trait::async_trait;
pub use builder::YfConnectorBuilder;
use chrono::{DateTime, Utc};
use greeninvest_core::{
    GreenInvestError, HistoryRange, MetricSet, PricePoint, PriceSeries, Ticker,
    connector::{ConnectorKey, MarketDataConnector, MetricsProvider, PriceHistoryProvider},
};
use paft::market::requests::history::Interval;
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type SummaryAdapter = Arc<dyn YfSummary>;
#[cfg(not(feature = "test-adapters"))]
type SummaryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

/// Public connector type. Production users construct it with `YfConnector::builder()`.
pub struct YfConnector {
    summary: SummaryAdapter,
    history: HistoryAdapter,
}

impl YfConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("greeninvest-yfinance");

    /// `quoteSummary` modules holding every dashboard metric.
    pub const SUMMARY_MODULES: &'static [&'static str] =
        &["summaryDetail", "financialData", "defaultKeyStatistics"];

    /// Daily bars ending at `now` and covering `range`.
    fn history_request(
        range: HistoryRange,
        now: DateTime<Utc>,
    ) -> yf::core::services::HistoryRequest {
        let end = now.timestamp();
        yf::core::services::HistoryRequest {
            range: None,
            period: Some((end - range.lookback_days() * 86_400, end)),
            interval: Interval::D1,
            include_prepost: false,
            include_actions: false,
            auto_adjust: true,
            keepna: false,
        }
    }

    /// Closing prices of `resp`, skipping closes that do not fit an `f64`.
    fn closes(ticker: Ticker, resp: yf::HistoryResponse) -> PriceSeries {
        let points = resp
            .candles
            .into_iter()
            .filter_map(|c| {
                Some(PricePoint {
                    ts: c.ts,
                    close: c.close.amount().to_f64()?,
                })
            })
            .collect();
        PriceSeries::new(ticker, points)
    }

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: GreenInvestError, what: &str) -> GreenInvestError {
        match e {
            GreenInvestError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    GreenInvestError::not_found(what.to_string())
                } else {
                    GreenInvestError::connector("greeninvest-yfinance", msg)
                }
            }
            other => other,
        }
    }

    /// Start configuring a connector for the real endpoints.
    #[must_use]
    pub fn builder() -> YfConnectorBuilder {
        YfConnectorBuilder::default()
    }

    /// Connector with production endpoints and defaults.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, GreenInvestError> {
        Self::builder().build()
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            summary: adapter.clone_arc_summary(),
            history: adapter.clone_arc_history(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            summary: Arc::clone(&shared),
            history: shared,
        }
    }
}

#[async_trait]
impl MetricsProvider for YfConnector {
    #[tracing::instrument(level = "debug", skip(self, ticker), fields(ticker = %ticker))]
    async fn metrics(&self, ticker: &Ticker) -> Result<MetricSet, GreenInvestError> {
        let what = format!("metrics for {ticker}");
        let modules = self
            .summary
            .quote_summary(ticker.as_str(), Self::SUMMARY_MODULES)
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        Ok(modules.into_metric_set())
    }
}

#[async_trait]
impl PriceHistoryProvider for YfConnector {
    #[tracing::instrument(level = "debug", skip(self, ticker, range), fields(ticker = %ticker, range = range.as_token()))]
    async fn price_history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<PriceSeries, GreenInvestError> {
        let what = format!("price history for {ticker}");
        let raw = self
            .history
            .fetch_full(ticker.as_str(), Self::history_request(range, Utc::now()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        Ok(Self::closes(ticker.clone(), raw))
    }
}

impl MarketDataConnector for YfConnector {
    fn name(&self) -> &'static str {
        "greeninvest-yfinance"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_metrics_provider(&self) -> Option<&dyn MetricsProvider> {
        Some(self as &dyn MetricsProvider)
    }

    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        Some(self as &dyn PriceHistoryProvider)
    }
}
