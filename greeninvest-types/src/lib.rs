//! GreenInvest data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod metrics;
mod price;
mod reports;
mod sentiment;
mod ticker;

pub use config::{DEFAULT_BENCHMARK_ESG, GreenInvestConfig};
pub use connector::ConnectorKey;
pub use error::GreenInvestError;
pub use metrics::{Metric, MetricSet, NOT_AVAILABLE, format_metric};
pub use price::{HistoryRange, PricePoint, PriceSeries};
pub use reports::{MetricsReport, PriceReport};
pub use sentiment::{NEUTRAL_SCORE, ScoringMethod, SentimentBreakdown, SentimentResult};
pub use ticker::Ticker;
