use greeninvest_core::MarketDataConnector;
use greeninvest_yfinance::YfConnector;

#[test]
fn yf_connector_advertises_metrics_and_history() {
    let yf = YfConnector::try_new_default().expect("default connector builds");
    assert_eq!(yf.name(), "greeninvest-yfinance");
    assert_eq!(yf.vendor(), "Yahoo Finance");
    assert_eq!(yf.key(), YfConnector::KEY);
    assert!(yf.as_metrics_provider().is_some());
    assert!(yf.as_price_history_provider().is_some());
}

#[test]
fn builder_rejects_bad_endpoint() {
    let err = YfConnector::builder()
        .query_base("not a url")
        .build()
        .err()
        .expect("invalid base must fail");
    assert!(matches!(err, greeninvest_core::GreenInvestError::InvalidArg(_)));
}
