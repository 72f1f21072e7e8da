use std::time::Duration;

use greeninvest_core::GreenInvestError;

use crate::YfConnector;
use crate::adapter::{DEFAULT_COOKIE_URL, DEFAULT_QUERY_BASE, Endpoints, RealAdapter};

/// Builder for a [`YfConnector`] backed by the real Yahoo endpoints.
///
/// Every setting has a production default; tests override the
/// `quoteSummary` endpoint roots to aim the connector at a local HTTP mock.
#[derive(Debug, Clone)]
pub struct YfConnectorBuilder {
    query_base: String,
    cookie_url: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl Default for YfConnectorBuilder {
    fn default() -> Self {
        Self {
            query_base: DEFAULT_QUERY_BASE.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            timeout: Duration::from_secs(10),
            http: None,
        }
    }
}

impl YfConnectorBuilder {
    /// Root for the JSON APIs (default `https://query1.finance.yahoo.com`).
    #[must_use]
    pub fn query_base(mut self, url: impl Into<String>) -> Self {
        self.query_base = url.into();
        self
    }

    /// Page visited for cookies ahead of the crumb request.
    #[must_use]
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cookie_url = url.into();
        self
    }

    /// Per-request HTTP timeout. Ignored when a custom client is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a pre-configured `reqwest::Client` for both `quoteSummary` and the
    /// `YfClient`. It should enable a cookie store.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` for unparsable endpoint URLs, or a connector error
    /// if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YfConnector, GreenInvestError> {
        let endpoints = Endpoints::parse(&self.query_base, &self.cookie_url)?;
        let adapter = match self.http {
            Some(http) => RealAdapter::with_client(http, endpoints)?,
            None => RealAdapter::new(endpoints, self.timeout)?,
        };
        Ok(YfConnector::from_adapter(&adapter))
    }
}
