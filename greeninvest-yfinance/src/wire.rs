//! Serde shapes for the Yahoo Finance `quoteSummary` endpoint.
//!
//! Only the fields the dashboard reads are modeled; everything else in the
//! payload is ignored.

use greeninvest_core::{GreenInvestError, Metric, MetricSet};
use serde::Deserialize;

/// Yahoo wraps numbers as `{"raw": 1.0, "fmt": "1.00"}`; an empty object means unknown.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct RawNum {
    /// Unformatted value.
    #[serde(default)]
    pub raw: Option<f64>,
}

fn raw(n: Option<RawNum>) -> Option<f64> {
    n.and_then(|n| n.raw)
}

/// Error object embedded in Yahoo envelopes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Short code such as `Not Found`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiError {
    fn into_error(self, what: &str) -> GreenInvestError {
        let code = self.code.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            return GreenInvestError::not_found(what.to_string());
        }
        let msg = self.description.unwrap_or(code);
        GreenInvestError::connector("greeninvest-yfinance", msg)
    }
}

/// `/v10/finance/quoteSummary` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryEnvelope {
    /// Envelope body.
    pub quote_summary: Body<SummaryModules>,
}

/// `{result, error}` envelope body.
#[derive(Debug, Deserialize)]
pub struct Body<T> {
    /// One entry per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<T>>,
    /// Set when Yahoo rejected the request.
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl<T> Body<T> {
    /// First result, or the envelope error mapped to a `GreenInvestError`.
    ///
    /// # Errors
    /// Returns `NotFound` when the result list is missing or empty, or the
    /// mapped API error when Yahoo reported one.
    pub fn into_first(self, what: &str) -> Result<T, GreenInvestError> {
        if let Some(err) = self.error {
            return Err(err.into_error(what));
        }
        self.result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| GreenInvestError::not_found(what.to_string()))
    }
}

/// Modules requested from `quoteSummary`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryModules {
    /// `summaryDetail` module.
    #[serde(default)]
    pub summary_detail: Option<SummaryDetail>,
    /// `financialData` module.
    #[serde(default)]
    pub financial_data: Option<FinancialData>,
    /// `defaultKeyStatistics` module.
    #[serde(default)]
    pub default_key_statistics: Option<KeyStatistics>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    #[serde(default)]
    pub market_cap: Option<RawNum>,
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<RawNum>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(default)]
    pub revenue_growth: Option<RawNum>,
    #[serde(default)]
    pub profit_margins: Option<RawNum>,
    #[serde(default)]
    pub operating_margins: Option<RawNum>,
    #[serde(default)]
    pub return_on_equity: Option<RawNum>,
    #[serde(default)]
    pub total_revenue: Option<RawNum>,
    #[serde(default)]
    pub debt_to_equity: Option<RawNum>,
    #[serde(default)]
    pub current_ratio: Option<RawNum>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatistics {
    #[serde(default)]
    pub profit_margins: Option<RawNum>,
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<RawNum>,
}

impl SummaryModules {
    /// Flatten the modules into a metric snapshot.
    ///
    /// Every metric is recorded; values Yahoo did not report are kept as
    /// unknown so they display as `N/A`.
    #[must_use]
    pub fn into_metric_set(self) -> MetricSet {
        let detail = self.summary_detail.unwrap_or_default();
        let fin = self.financial_data.unwrap_or_default();
        let stats = self.default_key_statistics.unwrap_or_default();
        MetricSet::from_values([
            (Metric::MarketCap, raw(detail.market_cap)),
            (
                Metric::PeRatio,
                raw(detail.trailing_pe).or_else(|| raw(stats.trailing_pe)),
            ),
            (Metric::RevenueGrowth, raw(fin.revenue_growth)),
            (
                Metric::ProfitMargin,
                raw(fin.profit_margins).or_else(|| raw(stats.profit_margins)),
            ),
            (Metric::OperatingMargin, raw(fin.operating_margins)),
            (Metric::ReturnOnEquity, raw(fin.return_on_equity)),
            (Metric::TotalRevenue, raw(fin.total_revenue)),
            (Metric::DebtToEquity, raw(fin.debt_to_equity)),
            (Metric::CurrentRatio, raw(fin.current_ratio)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_maps_known_fields_and_marks_missing() {
        let json = r#"{"quoteSummary":{"result":[{
            "summaryDetail":{"marketCap":{"raw":2500000000000.0,"fmt":"2.5T"},"trailingPE":{}},
            "financialData":{"profitMargins":{"raw":0.25},"currentRatio":{"raw":1.07}},
            "defaultKeyStatistics":{"trailingPE":{"raw":29.5}}
        }],"error":null}}"#;
        let env: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        let set = env.quote_summary.into_first("AAPL").unwrap().into_metric_set();
        assert_eq!(set.len(), Metric::ALL.len());
        assert_eq!(set.formatted(Metric::MarketCap), "$2.50T");
        assert_eq!(set.formatted(Metric::PeRatio), "29.50");
        assert_eq!(set.formatted(Metric::ProfitMargin), "25.00%");
        assert_eq!(set.formatted(Metric::RevenueGrowth), "N/A");
        assert_eq!(set.raw(Metric::CurrentRatio), Some(1.07));
    }

    #[test]
    fn envelope_error_maps_not_found() {
        let json = r#"{"quoteSummary":{"result":null,"error":{"code":"Not Found","description":"Quote not found for symbol: ZZZZ"}}}"#;
        let env: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        let err = env.quote_summary.into_first("metrics for ZZZZ").unwrap_err();
        assert!(matches!(err, GreenInvestError::NotFound { .. }));
    }
}
