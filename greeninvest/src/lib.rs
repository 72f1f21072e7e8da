//! GreenInvest pairs a company's financial snapshot with an ESG score derived
//! from its report text.
//!
//! Overview
//! - [`Dashboard`] routes metric and price-history requests to connectors that
//!   implement the `greeninvest_core` contracts, bounding each call with the
//!   configured provider timeout.
//! - Provider failures never abort a run: they are logged, attached to the
//!   returned report as warnings, and degrade to empty data.
//! - ESG text is scored by the VADER lexicon scorer when the lexicon file is
//!   available and by keyword overlap otherwise.
//! - [`Session`] keeps the state of an interactive run, including the last
//!   computed assessment that reports are generated from.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use greeninvest::{Dashboard, Session};
//! use greeninvest_core::Ticker;
//!
//! let dashboard = Dashboard::builder()
//!     .with_connector(Arc::new(greeninvest_yfinance::YfConnector::try_new_default()?))
//!     .benchmark_esg(0.75)
//!     .build()?;
//!
//! let mut session = Session::new(&dashboard, Ticker::parse("AAPL")?);
//! session.analyze("Our sustainable, responsible sourcing program improved again.");
//! let path = session.export_report(None).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod session;
pub mod setup;

use std::path::Path;

pub use crate::core::{Dashboard, DashboardBuilder};
pub use greeninvest_core::{
    GreenInvestConfig, GreenInvestError, HistoryRange, MetricSet, MetricsReport, PriceReport,
    PriceSeries, ScoringMethod, SentimentResult, Ticker,
};
pub use session::Session;

/// Write `text` to `path`, creating missing parent directories.
///
/// # Errors
/// Returns `Io` if a directory or the file cannot be written.
pub fn write_text_file(path: &Path, text: &str) -> Result<(), GreenInvestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| GreenInvestError::io(parent.display().to_string(), &e))?;
    }
    std::fs::write(path, text).map_err(|e| GreenInvestError::io(path.display().to_string(), &e))
}
