use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use greeninvest_core::chart::render_price_chart;
use greeninvest_core::report::generate_report;
use greeninvest_core::sentiment::EsgAnalyzer;
use greeninvest_core::{
    GreenInvestConfig, GreenInvestError, HistoryRange, MarketDataConnector, MetricSet,
    MetricsReport, PriceReport, PriceSeries, SentimentResult, Ticker,
};

/// Dashboard that fetches market data from registered connectors and scores ESG text.
pub struct Dashboard {
    pub(crate) connectors: Vec<Arc<dyn MarketDataConnector>>,
    pub(crate) cfg: GreenInvestConfig,
    analyzer: EsgAnalyzer,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connectors: Vec<Arc<dyn MarketDataConnector>>,
    cfg: GreenInvestConfig,
    analyzer: Option<EsgAnalyzer>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: GreenInvestConfig::default(),
            analyzer: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order; the first successful
    /// answer wins.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MarketDataConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: GreenInvestConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// ESG score the analyzed company is compared against.
    #[must_use]
    pub const fn benchmark_esg(mut self, benchmark: f64) -> Self {
        self.cfg.benchmark_esg = benchmark;
        self
    }

    /// Path of the VADER lexicon loaded at build time.
    #[must_use]
    pub fn lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cfg.lexicon_path = path.into();
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Lookback window for price history.
    #[must_use]
    pub const fn history_range(mut self, range: HistoryRange) -> Self {
        self.cfg.history_range = range;
        self
    }

    /// Width of the rendered price chart in columns.
    #[must_use]
    pub const fn chart_width(mut self, width: usize) -> Self {
        self.cfg.chart_width = width;
        self
    }

    /// Default destination of exported reports.
    #[must_use]
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cfg.report_path = path.into();
        self
    }

    /// Use a pre-built analyzer instead of loading `lexicon_path`.
    #[must_use]
    pub fn analyzer(mut self, analyzer: EsgAnalyzer) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build the `Dashboard`.
    ///
    /// Loads the sentiment lexicon unless an analyzer was supplied; a missing
    /// lexicon is not an error and selects the keyword fallback.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no connector is registered, the benchmark is
    /// outside `[0, 1]`, or the chart width or provider timeout is zero.
    pub fn build(self) -> Result<Dashboard, GreenInvestError> {
        if self.connectors.is_empty() {
            return Err(GreenInvestError::InvalidArg(
                "at least one connector must be registered".into(),
            ));
        }
        let b = self.cfg.benchmark_esg;
        if !(0.0..=1.0).contains(&b) {
            return Err(GreenInvestError::InvalidArg(format!(
                "benchmark ESG score must be within [0, 1], got {b}"
            )));
        }
        if self.cfg.chart_width == 0 {
            return Err(GreenInvestError::InvalidArg(
                "chart width must be positive".into(),
            ));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(GreenInvestError::InvalidArg(
                "provider timeout must be positive".into(),
            ));
        }

        let analyzer = self
            .analyzer
            .unwrap_or_else(|| EsgAnalyzer::from_lexicon_path(&self.cfg.lexicon_path));
        Ok(Dashboard {
            connectors: self.connectors,
            cfg: self.cfg,
            analyzer,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreenInvestConfig {
        &self.cfg
    }

    /// Analyzer chosen at build time.
    #[must_use]
    pub const fn analyzer(&self) -> &EsgAnalyzer {
        &self.analyzer
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[tracing::instrument(
        name = "greeninvest::core::provider_call_with_timeout",
        skip(fut),
        fields(
            connector = connector_name,
            capability = capability,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, GreenInvestError>
    where
        Fut: core::future::Future<Output = Result<T, GreenInvestError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(GreenInvestError::provider_timeout(connector_name, capability)))
    }

    /// Fetch the financial metrics for `ticker`.
    ///
    /// Never fails: provider errors and timeouts are logged, collected into
    /// `warnings`, and the metrics degrade to an empty set.
    #[tracing::instrument(name = "greeninvest::fetch_metrics", skip(self, ticker), fields(ticker = %ticker))]
    pub async fn fetch_metrics(&self, ticker: &Ticker) -> MetricsReport {
        let mut warnings = Vec::new();
        let mut attempted_any = false;
        for c in &self.connectors {
            let Some(p) = c.as_metrics_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                "metrics",
                self.cfg.provider_timeout,
                p.metrics(ticker),
            )
            .await
            {
                Ok(metrics) => {
                    return MetricsReport {
                        ticker: ticker.clone(),
                        metrics,
                        warnings,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        connector = c.name(),
                        error = %e,
                        actionable = e.is_actionable(),
                        "error fetching company data"
                    );
                    warnings.push(e);
                }
            }
        }
        if !attempted_any {
            warnings.push(GreenInvestError::unsupported("metrics"));
        }
        MetricsReport {
            ticker: ticker.clone(),
            metrics: MetricSet::empty(),
            warnings,
        }
    }

    /// Fetch daily closes for `ticker` over the configured range.
    ///
    /// Empty answers fall through to the next connector. Failures degrade to an
    /// empty series, which renders as "Unable to retrieve stock data.".
    #[tracing::instrument(name = "greeninvest::price_history", skip(self, ticker), fields(ticker = %ticker))]
    pub async fn price_history(&self, ticker: &Ticker) -> PriceReport {
        let mut warnings = Vec::new();
        let mut attempted_any = false;
        for c in &self.connectors {
            let Some(p) = c.as_price_history_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                "price_history",
                self.cfg.provider_timeout,
                p.price_history(ticker, self.cfg.history_range),
            )
            .await
            {
                Ok(series) if !series.is_empty() => return PriceReport { series, warnings },
                Ok(_) => tracing::debug!(connector = c.name(), "empty price history; trying next"),
                Err(e) => {
                    tracing::warn!(
                        connector = c.name(),
                        error = %e,
                        actionable = e.is_actionable(),
                        "error fetching stock data"
                    );
                    warnings.push(e);
                }
            }
        }
        if !attempted_any {
            warnings.push(GreenInvestError::unsupported("price_history"));
        }
        PriceReport {
            series: PriceSeries::empty(ticker.clone()),
            warnings,
        }
    }

    /// Score ESG report text.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentResult {
        self.analyzer.analyze(text)
    }

    /// Render the price chart block for a fetched series.
    #[must_use]
    pub fn render_chart(&self, series: &PriceSeries) -> String {
        let title = format!(
            "{} Stock Price ({})",
            series.ticker,
            self.cfg.history_range.label()
        );
        render_price_chart(series, &title, self.cfg.chart_width)
    }

    /// Build the report text against the configured benchmark.
    #[must_use]
    pub fn report_text(
        &self,
        ticker: &Ticker,
        metrics: &MetricSet,
        assessment: &SentimentResult,
    ) -> String {
        generate_report(ticker, metrics, assessment, self.cfg.benchmark_esg)
    }
}
