use async_trait::async_trait;

pub use greeninvest_types::ConnectorKey;
use greeninvest_types::{GreenInvestError, HistoryRange, MetricSet, PriceSeries, Ticker};

/// Focused role trait for connectors that provide fundamental/valuation metrics.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Fetch the metric snapshot for the given ticker.
    async fn metrics(&self, ticker: &Ticker) -> Result<MetricSet, GreenInvestError>;
}

/// Focused role trait for connectors that provide daily closing prices.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch daily closes for the given ticker over `range`.
    async fn price_history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<PriceSeries, GreenInvestError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait MarketDataConnector: Send + Sync {
    /// A stable identifier (e.g., "greeninvest-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise metrics capability by returning a usable trait object reference when supported.
    fn as_metrics_provider(&self) -> Option<&dyn MetricsProvider> {
        None
    }

    /// Advertise price history capability by returning a usable trait object reference when supported.
    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        None
    }
}
