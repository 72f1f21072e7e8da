use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use greeninvest_core::connector::{MarketDataConnector, MetricsProvider, PriceHistoryProvider};
use greeninvest_core::{GreenInvestError, HistoryRange, MetricSet, PriceSeries, Ticker};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(GreenInvestError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    metrics_rules: HashMap<Ticker, MockBehavior<MetricSet>>,
    history_rules: HashMap<Ticker, MockBehavior<PriceSeries>>,
    calls: Vec<(&'static str, Ticker)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `metrics` calls for a specific ticker.
    pub async fn set_metrics_behavior(&self, ticker: Ticker, behavior: MockBehavior<MetricSet>) {
        let mut guard = self.state.lock().await;
        guard.metrics_rules.insert(ticker, behavior);
    }

    /// Set the behavior for `price_history` calls for a specific ticker.
    pub async fn set_history_behavior(
        &self,
        ticker: Ticker,
        behavior: MockBehavior<PriceSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(ticker, behavior);
    }

    /// Capability/ticker pairs in call order.
    pub async fn calls(&self) -> Vec<(&'static str, Ticker)> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.metrics_rules.clear();
        guard.history_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Tickers without a configured behavior answer `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MarketDataConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MarketDataConnector>, controller)
    }

    /// Record the call and snapshot the configured behavior without holding
    /// the lock across await points.
    async fn behavior<T: Clone>(
        &self,
        capability: &'static str,
        ticker: &Ticker,
        pick: impl FnOnce(&InternalState) -> Option<&MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        guard.calls.push((capability, ticker.clone()));
        pick(&guard).cloned()
    }
}

async fn resolve<T>(behavior: Option<MockBehavior<T>>, capability: &str) -> Result<T, GreenInvestError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(GreenInvestError::unsupported(capability)),
    }
}

impl MarketDataConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_metrics_provider(&self) -> Option<&dyn MetricsProvider> {
        Some(self as &dyn MetricsProvider)
    }

    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        Some(self as &dyn PriceHistoryProvider)
    }
}

#[async_trait]
impl MetricsProvider for DynamicMockConnector {
    async fn metrics(&self, ticker: &Ticker) -> Result<MetricSet, GreenInvestError> {
        let behavior = self
            .behavior("metrics", ticker, |s| s.metrics_rules.get(ticker))
            .await;
        resolve(behavior, "metrics").await
    }
}

#[async_trait]
impl PriceHistoryProvider for DynamicMockConnector {
    async fn price_history(
        &self,
        ticker: &Ticker,
        _range: HistoryRange,
    ) -> Result<PriceSeries, GreenInvestError> {
        let behavior = self
            .behavior("price_history", ticker, |s| s.history_rules.get(ticker))
            .await;
        resolve(behavior, "price_history").await
    }
}
