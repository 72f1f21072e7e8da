//! greeninvest-mock
//!
//! Offline connectors for tests and demos.
//!
//! - [`MockConnector`] serves deterministic fixtures for `AAPL`, `MSFT` and
//!   `TSLA`. The symbol `EMPTY` yields empty data, `FAIL` a connector error and
//!   `TIMEOUT` a short delay before answering.
//! - [`DynamicMockConnector`] defers every call to a test-side controller.
use async_trait::async_trait;
use greeninvest_core::connector::{MarketDataConnector, MetricsProvider, PriceHistoryProvider};
use greeninvest_core::{GreenInvestError, HistoryRange, MetricSet, PriceSeries, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Delay applied to the `TIMEOUT` symbol.
pub const TIMEOUT_DELAY: std::time::Duration = std::time::Duration::from_millis(200);

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> GreenInvestError {
        GreenInvestError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(
        ticker: &Ticker,
        capability: &'static str,
    ) -> Result<(), GreenInvestError> {
        match ticker.as_str() {
            "FAIL" => Err(GreenInvestError::connector(
                "greeninvest-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough for a short provider timeout to fire first.
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl MarketDataConnector for MockConnector {
    fn name(&self) -> &'static str {
        "greeninvest-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_metrics_provider(&self) -> Option<&dyn MetricsProvider> {
        Some(self as &dyn MetricsProvider)
    }
    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        Some(self as &dyn PriceHistoryProvider)
    }
}

#[async_trait]
impl MetricsProvider for MockConnector {
    async fn metrics(&self, ticker: &Ticker) -> Result<MetricSet, GreenInvestError> {
        Self::maybe_fail_or_timeout(ticker, "metrics").await?;
        fixtures::metrics::by_symbol(ticker.as_str())
            .ok_or_else(|| Self::not_found(&format!("metrics for {ticker}")))
    }
}

#[async_trait]
impl PriceHistoryProvider for MockConnector {
    async fn price_history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<PriceSeries, GreenInvestError> {
        Self::maybe_fail_or_timeout(ticker, "price_history").await?;
        fixtures::history::by_symbol(ticker, range)
            .ok_or_else(|| Self::not_found(&format!("price history for {ticker}")))
    }
}
