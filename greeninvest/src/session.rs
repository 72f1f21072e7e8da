use std::path::{Path, PathBuf};

use greeninvest_core::{GreenInvestError, MetricSet, PriceReport, SentimentResult, Ticker};

use crate::Dashboard;

/// State of one interactive run: the selected ticker, its cached metrics, and
/// the last computed ESG assessment.
///
/// The assessment slot survives ticker changes, so a report for a new ticker
/// reuses the score computed before the switch until the text is re-analyzed.
pub struct Session<'d> {
    dashboard: &'d Dashboard,
    ticker: Ticker,
    metrics: MetricSet,
    metrics_cached: bool,
    last: Option<SentimentResult>,
}

impl<'d> Session<'d> {
    /// Start a session on `ticker` with no assessment.
    #[must_use]
    pub fn new(dashboard: &'d Dashboard, ticker: Ticker) -> Self {
        Self {
            dashboard,
            ticker,
            metrics: MetricSet::empty(),
            metrics_cached: false,
            last: None,
        }
    }

    /// Currently selected ticker.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Switch tickers. Cached metrics are dropped; the assessment is kept.
    pub fn set_ticker(&mut self, ticker: Ticker) {
        if ticker != self.ticker {
            self.metrics = MetricSet::empty();
            self.metrics_cached = false;
            self.ticker = ticker;
        }
    }

    /// Metrics for the current ticker.
    ///
    /// Only a fetch without warnings is cached; a degraded answer is returned
    /// once and the provider is asked again on the next call.
    pub async fn metrics(&mut self) -> &MetricSet {
        if !self.metrics_cached {
            let report = self.dashboard.fetch_metrics(&self.ticker).await;
            self.metrics_cached = report.warnings.is_empty();
            self.metrics = report.metrics;
        }
        &self.metrics
    }

    /// Price history for the current ticker. Not cached.
    pub async fn price_history(&self) -> PriceReport {
        self.dashboard.price_history(&self.ticker).await
    }

    /// Score `text` and store the result as the session's assessment.
    pub fn analyze(&mut self, text: &str) -> &SentimentResult {
        self.last.insert(self.dashboard.analyze(text))
    }

    /// Last computed assessment, if any.
    #[must_use]
    pub const fn last_assessment(&self) -> Option<&SentimentResult> {
        self.last.as_ref()
    }

    /// Report text for the current ticker.
    ///
    /// # Errors
    /// Returns `NoAssessment` if no analysis ran in this session.
    pub async fn report(&mut self) -> Result<String, GreenInvestError> {
        let Some(assessment) = self.last.clone() else {
            return Err(GreenInvestError::NoAssessment);
        };
        let dashboard = self.dashboard;
        let ticker = self.ticker.clone();
        let metrics = self.metrics().await;
        Ok(dashboard.report_text(&ticker, metrics, &assessment))
    }

    /// Write the report to `path`, or the configured report path when `None`.
    ///
    /// # Errors
    /// Returns `NoAssessment` if no analysis ran, or `Io` if the file cannot be written.
    pub async fn export_report(&mut self, path: Option<&Path>) -> Result<PathBuf, GreenInvestError> {
        let text = self.report().await?;
        let dest = path.map_or_else(
            || self.dashboard.config().report_path.clone(),
            Path::to_path_buf,
        );
        crate::write_text_file(&dest, &text)?;
        tracing::info!(path = %dest.display(), "report exported");
        Ok(dest)
    }
}
