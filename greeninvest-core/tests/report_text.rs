use greeninvest_core::report::{generate_report, meets_benchmark};
use greeninvest_core::{
    Metric, MetricSet, ScoringMethod, SentimentBreakdown, SentimentResult, Ticker,
};

fn assessment(score: f64) -> SentimentResult {
    SentimentResult {
        score,
        breakdown: SentimentBreakdown {
            compound: score.mul_add(2.0, -1.0),
            pos: score,
            neu: 0.0,
            neg: 1.0 - score,
        },
        method: ScoringMethod::KeywordFallback,
    }
}

fn metrics() -> MetricSet {
    MetricSet::from_values([
        (Metric::MarketCap, Some(2.9e12)),
        (Metric::PeRatio, Some(31.2)),
        (Metric::ProfitMargin, Some(0.246)),
        (Metric::DebtToEquity, None),
    ])
}

#[test]
fn report_contains_ticker_and_two_decimal_scores() {
    let ticker = Ticker::parse("aapl").unwrap();
    let text = generate_report(&ticker, &metrics(), &assessment(2.0 / 3.0), 0.75);
    assert!(text.starts_with("ESG Investment Analysis Report for AAPL\n"));
    assert!(text.contains("Calculated ESG Score: 0.67"));
    assert!(text.contains("Benchmark ESG Score: 0.75"));
}

#[test]
fn report_lists_formatted_metrics_in_order() {
    let ticker = Ticker::parse("AAPL").unwrap();
    let text = generate_report(&ticker, &metrics(), &assessment(0.5), 0.75);
    let cap = text.find("Market Cap: $2.90T").unwrap();
    let pe = text.find("P/E Ratio: 31.20").unwrap();
    let margin = text.find("Profit Margin: 24.60%").unwrap();
    let dte = text.find("Debt to Equity: N/A").unwrap();
    assert!(cap < pe && pe < margin && margin < dte);
}

#[test]
fn empty_metrics_are_called_out() {
    let ticker = Ticker::parse("XYZ").unwrap();
    let text = generate_report(&ticker, &MetricSet::empty(), &assessment(0.5), 0.75);
    assert!(text.contains("No financial data available."));
    assert!(text.contains("XYZ"));
}

#[test]
fn benchmark_comparison_is_inclusive() {
    assert!(meets_benchmark(0.75, 0.75));
    assert!(!meets_benchmark(0.74, 0.75));
    let ticker = Ticker::parse("MSFT").unwrap();
    let above = generate_report(&ticker, &metrics(), &assessment(0.8), 0.75);
    assert!(above.contains("meets or exceeds the benchmark"));
    let below = generate_report(&ticker, &metrics(), &assessment(0.2), 0.75);
    assert!(below.contains("below the benchmark"));
}

#[test]
fn methodology_names_the_scorer() {
    let ticker = Ticker::parse("MSFT").unwrap();
    let mut a = assessment(0.6);
    a.method = ScoringMethod::Lexicon;
    let text = generate_report(&ticker, &metrics(), &a, 0.75);
    assert!(text.contains("VADER"));
}

#[test]
fn report_ends_with_limitations_note() {
    let ticker = Ticker::parse("AAPL").unwrap();
    let text = generate_report(&ticker, &metrics(), &assessment(0.5), 0.75);
    assert!(text.ends_with(
        "This MVP uses a simplified scoring approach. In a production system, \
         more advanced NLP models and additional ESG factors should be incorporated."
    ));
}
