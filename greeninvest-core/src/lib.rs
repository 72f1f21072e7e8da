//! greeninvest-core
//!
//! Core traits and logic shared across the greeninvest workspace.
//!
//! - `connector`: the `MarketDataConnector` trait and capability provider traits.
//! - `sentiment`: lexicon and keyword scorers plus the `EsgAnalyzer`.
//! - `chart`: text sparkline rendering of closing prices.
//! - `report`: the exported plain-text report.
//!
//! Provider traits are async and assume a Tokio 1.x runtime in callers.
#![warn(missing_docs)]

/// Text rendition of price history.
pub mod chart;
/// Connector capability traits and the primary `MarketDataConnector` interface.
pub mod connector;
/// Plain-text report generation.
pub mod report;
/// ESG sentiment scoring.
pub mod sentiment;

pub use connector::{MarketDataConnector, MetricsProvider, PriceHistoryProvider};
pub use greeninvest_types::*;
