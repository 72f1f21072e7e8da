//! Command handlers and the display helpers they share.

pub mod analyze;
pub mod interactive;
pub mod setup;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use greeninvest::{Dashboard, GreenInvestConfig, GreenInvestError, MetricSet, SentimentResult, Ticker};
use greeninvest_core::MarketDataConnector;
use greeninvest_core::report::meets_benchmark;
use greeninvest_mock::MockConnector;
use greeninvest_yfinance::YfConnector;

/// Serve fixture data instead of querying Yahoo Finance when set.
pub const USE_MOCK_ENV: &str = "GREENINVEST_USE_MOCK";
/// Overrides the configured lexicon path when set.
pub const LEXICON_ENV: &str = "GREENINVEST_LEXICON";

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// JSON configuration file; unspecified fields keep their defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Benchmark ESG score (overrides the config file)
    #[arg(long, global = true)]
    pub benchmark: Option<f64>,

    /// VADER lexicon path (overrides the config file and GREENINVEST_LEXICON)
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,
}

impl GlobalArgs {
    /// Resolve configuration: file, then environment, then flags.
    pub fn load_config(&self) -> Result<GreenInvestConfig, GreenInvestError> {
        let mut cfg = match &self.config {
            Some(path) => read_config(path)?,
            None => GreenInvestConfig::default(),
        };
        if let Some(lexicon) = std::env::var_os(LEXICON_ENV) {
            cfg.lexicon_path = PathBuf::from(lexicon);
        }
        if let Some(lexicon) = &self.lexicon {
            cfg.lexicon_path.clone_from(lexicon);
        }
        if let Some(benchmark) = self.benchmark {
            cfg.benchmark_esg = benchmark;
        }
        Ok(cfg)
    }

    /// Build the dashboard for the resolved configuration.
    pub fn dashboard(&self) -> Result<Dashboard, GreenInvestError> {
        let cfg = self.load_config()?;
        let connector = connector(&cfg)?;
        Dashboard::builder()
            .config(cfg)
            .with_connector(connector)
            .build()
    }
}

fn read_config(path: &Path) -> Result<GreenInvestConfig, GreenInvestError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| GreenInvestError::io(path.display().to_string(), &e))?;
    serde_json::from_str(&text).map_err(|e| {
        GreenInvestError::InvalidArg(format!("invalid config {}: {e}", path.display()))
    })
}

fn connector(cfg: &GreenInvestConfig) -> Result<Arc<dyn MarketDataConnector>, GreenInvestError> {
    if std::env::var_os(USE_MOCK_ENV).is_some() {
        tracing::info!("using mock connector");
        return Ok(Arc::new(MockConnector::new()));
    }
    let yf = YfConnector::builder()
        .timeout(cfg.provider_timeout)
        .build()?;
    Ok(Arc::new(yf))
}

/// Map a failed console write.
pub fn out_err(e: std::io::Error) -> GreenInvestError {
    GreenInvestError::io("<stdout>", &e)
}

pub fn print_metrics<W: Write>(
    out: &mut W,
    ticker: &Ticker,
    metrics: &MetricSet,
) -> std::io::Result<()> {
    writeln!(out, "{ticker} - Company Financial Data")?;
    if metrics.is_empty() {
        writeln!(out, "  No financial data available.")?;
    }
    for (metric, shown) in metrics.iter_formatted() {
        writeln!(out, "  {:<18} {shown}", format!("{metric}:"))?;
    }
    Ok(())
}

pub fn print_assessment<W: Write>(out: &mut W, a: &SentimentResult) -> std::io::Result<()> {
    let b = &a.breakdown;
    writeln!(out, "ESG Analysis Result")?;
    writeln!(out, "  Calculated ESG Score: {:.2}", a.score)?;
    writeln!(
        out,
        "  Sentiment Analysis Detail: compound {:.3}, pos {:.3}, neu {:.3}, neg {:.3}",
        b.compound, b.pos, b.neu, b.neg
    )?;
    writeln!(out, "  Method: {}", a.method.describe())
}

pub fn print_benchmark<W: Write>(
    out: &mut W,
    benchmark: f64,
    last: Option<&SentimentResult>,
) -> std::io::Result<()> {
    writeln!(out, "Benchmark ESG Score: {benchmark:.2}")?;
    if let Some(a) = last {
        let verdict = if meets_benchmark(a.score, benchmark) {
            "meets or exceeds"
        } else {
            "is below"
        };
        writeln!(out, "  ESG score {:.2} {verdict} the benchmark.", a.score)?;
    }
    Ok(())
}
