//! Configuration shared by the dashboard, the CLI, and connectors.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::price::HistoryRange;

/// Benchmark ESG score used when none is configured.
pub const DEFAULT_BENCHMARK_ESG: f64 = 0.75;

/// Global configuration for the `Dashboard`.
///
/// Every field has a default, so a JSON config file may set any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenInvestConfig {
    /// ESG score that the analyzed company is compared against.
    pub benchmark_esg: f64,
    /// Location of the VADER lexicon file. When missing, the keyword fallback is used.
    pub lexicon_path: PathBuf,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Lookback window for the price chart.
    pub history_range: HistoryRange,
    /// Number of columns in the rendered price chart.
    pub chart_width: usize,
    /// Default destination of the exported report.
    pub report_path: PathBuf,
}

impl Default for GreenInvestConfig {
    fn default() -> Self {
        Self {
            benchmark_esg: DEFAULT_BENCHMARK_ESG,
            lexicon_path: PathBuf::from("data/vader_lexicon.txt"),
            provider_timeout: Duration::from_secs(5),
            history_range: HistoryRange::OneYear,
            chart_width: 60,
            report_path: PathBuf::from("esg_report.txt"),
        }
    }
}
