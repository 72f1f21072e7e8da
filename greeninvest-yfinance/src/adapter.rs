use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use greeninvest_core::GreenInvestError;
use reqwest::StatusCode;
use tokio::sync::Mutex;
use url::Url;
use yfinance_rs as yf;
use yf::core::HistoryService;

use crate::wire::{QuoteSummaryEnvelope, SummaryModules};

const CONNECTOR: &str = "greeninvest-yfinance";

/// Browser-like user agent; Yahoo rejects the default reqwest agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
/// Default host for the JSON APIs.
pub const DEFAULT_QUERY_BASE: &str = "https://query1.finance.yahoo.com";
/// Default URL visited to obtain the consent cookie before requesting a crumb.
pub const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";

/* ---------------- Focused adapter traits ---------------- */

/// `quoteSummary` role.
///
/// `yfinance-rs` has no accessor for the valuation and profitability modules,
/// so this role reads the raw endpoint.
#[async_trait]
pub trait YfSummary: Send + Sync {
    /// Fetch the requested `quoteSummary` modules for `symbol`.
    async fn quote_summary(
        &self,
        symbol: &str,
        modules: &[&str],
    ) -> Result<SummaryModules, GreenInvestError>;
}

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, GreenInvestError>;
}

/* ---------------- Production adapter ---------------- */

/// Endpoint roots used by [`RealAdapter`]. Tests point these at a local mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base for `/v10/finance/quoteSummary` and `/v1/test/getcrumb`.
    pub query_base: Url,
    /// Page visited to collect cookies before the crumb request.
    pub cookie_url: Url,
}

impl Endpoints {
    /// Parse endpoint roots.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either URL does not parse or cannot carry a path.
    pub fn parse(query_base: &str, cookie_url: &str) -> Result<Self, GreenInvestError> {
        Ok(Self {
            query_base: parse_base(query_base)?,
            cookie_url: parse_base(cookie_url)?,
        })
    }

    fn api(&self, segments: &[&str]) -> Url {
        let mut url = self.query_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn parse_base(s: &str) -> Result<Url, GreenInvestError> {
    let url =
        Url::parse(s).map_err(|e| GreenInvestError::InvalidArg(format!("invalid URL {s:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(GreenInvestError::InvalidArg(format!(
            "URL {s:?} cannot be used as a base"
        )));
    }
    Ok(url)
}

/// Production adapter.
///
/// History goes through a `YfClient`; `quoteSummary` goes through the same
/// cookie-enabled `reqwest::Client`. The crumb obtained on first use is cached
/// and shared between clones.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
    crumb: Arc<Mutex<Option<String>>>,
}

impl std::fmt::Debug for RealAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealAdapter")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl RealAdapter {
    /// Build an adapter with its own cookie-enabled HTTP client.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, GreenInvestError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GreenInvestError::connector(CONNECTOR, e.to_string()))?;
        Self::with_client(http, endpoints)
    }

    /// Build from an existing `reqwest::Client`, shared with the `YfClient`.
    ///
    /// The client should enable a cookie store for the crumb handshake.
    ///
    /// # Errors
    /// Returns a connector error if the `YfClient` cannot be constructed.
    pub fn with_client(http: reqwest::Client, endpoints: Endpoints) -> Result<Self, GreenInvestError> {
        let client = yf::YfClient::builder()
            .custom_client(http.clone())
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| GreenInvestError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self {
            client,
            http,
            endpoints: Arc::new(endpoints),
            crumb: Arc::new(Mutex::new(None)),
        })
    }

    async fn crumb(&self) -> Result<String, GreenInvestError> {
        let mut slot = self.crumb.lock().await;
        if let Some(crumb) = slot.as_ref() {
            return Ok(crumb.clone());
        }
        // Only the cookies matter here; the page itself usually answers 404.
        if let Err(e) = self.http.get(self.endpoints.cookie_url.clone()).send().await {
            tracing::debug!(error = %e, "cookie preflight failed");
        }
        let url = self.endpoints.api(&["v1", "test", "getcrumb"]);
        let resp = self.http.get(url).send().await.map_err(transport)?;
        let text = map_status(resp, "crumb")?
            .text()
            .await
            .map_err(transport)?;
        let crumb = text.trim().to_string();
        if crumb.is_empty() || crumb.contains(['<', ' ']) {
            return Err(GreenInvestError::connector(
                CONNECTOR,
                "invalid crumb returned by Yahoo",
            ));
        }
        tracing::debug!("obtained Yahoo crumb");
        *slot = Some(crumb.clone());
        Ok(crumb)
    }

    async fn forget_crumb(&self) {
        self.crumb.lock().await.take();
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> GreenInvestError {
    match e {
        yf::YfError::NotFound { .. } => GreenInvestError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            GreenInvestError::connector(CONNECTOR, format!("rate limited while fetching {context}"))
        }
        yf::YfError::ServerError { status, .. } => GreenInvestError::connector(
            CONNECTOR,
            format!("server error {status} while fetching {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            GreenInvestError::connector(CONNECTOR, format!("HTTP {status} while fetching {context}"))
        }
        other => GreenInvestError::connector(CONNECTOR, other.to_string()),
    }
}

fn transport(e: reqwest::Error) -> GreenInvestError {
    GreenInvestError::connector(CONNECTOR, e.to_string())
}

/// Map an HTTP status onto the workspace error space.
fn map_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, GreenInvestError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(match status {
        StatusCode::NOT_FOUND => GreenInvestError::not_found(what.to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            GreenInvestError::connector(CONNECTOR, format!("rate limited while fetching {what}"))
        }
        s => GreenInvestError::connector(CONNECTOR, format!("HTTP {s} while fetching {what}")),
    })
}

#[async_trait]
impl YfSummary for RealAdapter {
    async fn quote_summary(
        &self,
        symbol: &str,
        modules: &[&str],
    ) -> Result<SummaryModules, GreenInvestError> {
        let what = format!("metrics for {symbol}");
        let crumb = self.crumb().await?;
        let mut url = self.endpoints.api(&["v10", "finance", "quoteSummary", symbol]);
        url.query_pairs_mut()
            .append_pair("modules", &modules.join(","))
            .append_pair("crumb", &crumb);

        let resp = self.http.get(url).send().await.map_err(transport)?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            self.forget_crumb().await;
        }
        let env: QuoteSummaryEnvelope = map_status(resp, &what)?
            .json()
            .await
            .map_err(|e| GreenInvestError::Data(format!("quoteSummary decode: {e}")))?;
        env.quote_summary.into_first(&what)
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, GreenInvestError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("price history for {symbol}")))
    }
}

/* ---------------- Test-only injection ---------------- */

#[cfg(feature = "test-adapters")]
impl dyn YfSummary {
    /// Build a `YfSummary` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfSummary>
    where
        F: Send + Sync + 'static + Fn(String, Vec<String>) -> Result<SummaryModules, GreenInvestError>,
    {
        struct FnSummary<F>(F);
        #[async_trait]
        impl<F> YfSummary for FnSummary<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, Vec<String>) -> Result<SummaryModules, GreenInvestError>,
        {
            async fn quote_summary(
                &self,
                symbol: &str,
                modules: &[&str],
            ) -> Result<SummaryModules, GreenInvestError> {
                (self.0)(
                    symbol.to_string(),
                    modules.iter().map(ToString::to_string).collect(),
                )
            }
        }
        Arc::new(FnSummary(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, GreenInvestError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, GreenInvestError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, GreenInvestError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

/// Hands out shared adapter handles; unimplemented roles answer `Unsupported`.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Summary adapter handle.
    fn clone_arc_summary(&self) -> Arc<dyn YfSummary> {
        <dyn YfSummary>::from_fn(|_, _| Err(GreenInvestError::unsupported("metrics")))
    }
    /// History adapter handle.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(GreenInvestError::unsupported("price_history")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_summary(&self) -> Arc<dyn YfSummary> {
        Arc::new(self.clone()) as Arc<dyn YfSummary>
    }
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
}
