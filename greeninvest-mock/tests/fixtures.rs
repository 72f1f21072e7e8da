use greeninvest_core::{
    GreenInvestError, HistoryRange, MarketDataConnector, Metric, MetricsProvider,
    PriceHistoryProvider, Ticker,
};
use greeninvest_mock::MockConnector;

fn t(s: &str) -> Ticker {
    Ticker::parse(s).unwrap()
}

#[tokio::test]
async fn known_symbol_has_every_metric() {
    let m = MockConnector::new().metrics(&t("AAPL")).await.unwrap();
    assert_eq!(m.len(), Metric::ALL.len());
    assert_eq!(m.formatted(Metric::MarketCap), "$2.95T");
    assert_eq!(m.formatted(Metric::RevenueGrowth), "6.10%");
}

#[tokio::test]
async fn sparse_fixture_shows_not_available() {
    let m = MockConnector::new().metrics(&t("TSLA")).await.unwrap();
    assert_eq!(m.formatted(Metric::PeRatio), "N/A");
    assert_eq!(m.formatted(Metric::RevenueGrowth), "-9.20%");
}

#[tokio::test]
async fn history_length_follows_range() {
    let mock = MockConnector::new();
    let month = mock
        .price_history(&t("MSFT"), HistoryRange::OneMonth)
        .await
        .unwrap();
    let year = mock
        .price_history(&t("MSFT"), HistoryRange::OneYear)
        .await
        .unwrap();
    assert_eq!(month.points.len(), 21);
    assert_eq!(year.points.len(), 252);
    assert!(year.points.windows(2).all(|w| w[0].ts < w[1].ts));
    assert!(year.closes().all(|c| c.is_finite() && c > 0.0));
}

#[tokio::test]
async fn unknown_and_failing_symbols() {
    let mock = MockConnector::new();
    let err = mock.metrics(&t("ZZZZ")).await.unwrap_err();
    assert!(matches!(err, GreenInvestError::NotFound { .. }));

    let err = mock
        .price_history(&t("FAIL"), HistoryRange::OneYear)
        .await
        .unwrap_err();
    assert!(matches!(err, GreenInvestError::Connector { .. }));
}

#[tokio::test]
async fn empty_symbol_yields_empty_data() {
    let mock = MockConnector::new();
    assert!(mock.metrics(&t("EMPTY")).await.unwrap().is_empty());
    assert!(
        mock.price_history(&t("EMPTY"), HistoryRange::OneYear)
            .await
            .unwrap()
            .is_empty()
    );
}

#[test]
fn advertises_both_capabilities() {
    let mock = MockConnector::new();
    assert_eq!(mock.name(), "greeninvest-mock");
    assert!(mock.as_metrics_provider().is_some());
    assert!(mock.as_price_history_provider().is_some());
}
