use greeninvest_core::{GreenInvestError, Metric, MetricsProvider, Ticker};
use greeninvest_yfinance::YfConnector;
use httpmock::prelude::*;
use serde_json::json;

fn connector(server: &MockServer) -> YfConnector {
    YfConnector::builder()
        .query_base(server.base_url())
        .cookie_url(server.url("/consent"))
        .build()
        .expect("connector builds")
}

fn ticker(s: &str) -> Ticker {
    Ticker::parse(s).expect("valid ticker")
}

#[tokio::test]
async fn metrics_performs_crumb_handshake_once() {
    let server = MockServer::start_async().await;
    let consent = server
        .mock_async(|when, then| {
            when.method(GET).path("/consent");
            then.status(404).header("set-cookie", "A3=d=abc; Path=/");
        })
        .await;
    let crumb = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("crumb123");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v10/finance/quoteSummary/AAPL")
                .query_param("crumb", "crumb123")
                .query_param("modules", "summaryDetail,financialData,defaultKeyStatistics");
            then.status(200).json_body(json!({
                "quoteSummary": {
                    "result": [{
                        "summaryDetail": {
                            "marketCap": {"raw": 2.95e12, "fmt": "2.95T"},
                            "trailingPE": {"raw": 30.12}
                        },
                        "financialData": {
                            "revenueGrowth": {"raw": 0.061},
                            "profitMargins": {"raw": 0.2531},
                            "operatingMargins": {"raw": 0.3076},
                            "returnOnEquity": {"raw": 1.5608},
                            "totalRevenue": {"raw": 3.8529e11},
                            "debtToEquity": {"raw": 151.862},
                            "currentRatio": {"raw": 0.867}
                        },
                        "defaultKeyStatistics": {}
                    }],
                    "error": null
                }
            }));
        })
        .await;

    let yf = connector(&server);
    let first = yf.metrics(&ticker("AAPL")).await.expect("metrics");
    let second = yf.metrics(&ticker("AAPL")).await.expect("metrics again");

    assert_eq!(first, second);
    assert_eq!(first.formatted(Metric::MarketCap), "$2.95T");
    assert_eq!(first.formatted(Metric::ProfitMargin), "25.31%");
    assert_eq!(first.formatted(Metric::ReturnOnEquity), "156.08%");
    assert_eq!(first.formatted(Metric::TotalRevenue), "$385.29B");
    assert_eq!(first.formatted(Metric::DebtToEquity), "151.86");
    assert_eq!(first.formatted(Metric::CurrentRatio), "0.87");

    consent.assert_async().await;
    crumb.assert_async().await;
}

#[tokio::test]
async fn unknown_symbol_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("c");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/ZZZZ");
            then.status(404).json_body(json!({
                "quoteSummary": {
                    "result": null,
                    "error": {"code": "Not Found", "description": "Quote not found for symbol: ZZZZ"}
                }
            }));
        })
        .await;

    let err = connector(&server)
        .metrics(&ticker("ZZZZ"))
        .await
        .expect_err("unknown symbol");
    assert!(matches!(err, GreenInvestError::NotFound { .. }));
}

#[tokio::test]
async fn server_error_is_connector_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("c");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/AAPL");
            then.status(503);
        })
        .await;

    let err = connector(&server)
        .metrics(&ticker("AAPL"))
        .await
        .expect_err("server error");
    assert!(
        matches!(&err, GreenInvestError::Connector { connector, .. } if connector == "greeninvest-yfinance"),
        "unexpected error: {err:?}"
    );
}
