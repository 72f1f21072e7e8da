//! Plain-text analysis report.

use std::fmt::Write as _;

use greeninvest_types::{MetricSet, SentimentResult, Ticker};

const RULE_WIDTH: usize = 40;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}:");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

/// Whether `score` meets or exceeds `benchmark`.
#[must_use]
pub fn meets_benchmark(score: f64, benchmark: f64) -> bool {
    score >= benchmark
}

/// Build the exported report for one analysis.
///
/// The text always names the ticker and prints both the ESG score and the
/// benchmark with two decimals.
#[must_use]
pub fn generate_report(
    ticker: &Ticker,
    metrics: &MetricSet,
    assessment: &SentimentResult,
    benchmark: f64,
) -> String {
    let mut out = format!("ESG Investment Analysis Report for {ticker}\n");

    section(&mut out, "Financial Overview");
    if metrics.is_empty() {
        out.push_str("No financial data available.\n");
    }
    for (metric, shown) in metrics.iter_formatted() {
        let _ = writeln!(out, "{metric}: {shown}");
    }

    section(&mut out, "ESG Analysis");
    let b = &assessment.breakdown;
    let _ = writeln!(out, "Calculated ESG Score: {:.2}", assessment.score);
    let _ = writeln!(out, "Benchmark ESG Score: {benchmark:.2}");
    let _ = writeln!(
        out,
        "Sentiment Detail: compound {:.3}, pos {:.3}, neu {:.3}, neg {:.3}",
        b.compound, b.pos, b.neu, b.neg
    );

    section(&mut out, "Analysis Summary");
    if meets_benchmark(assessment.score, benchmark) {
        out.push_str("The company's ESG performance meets or exceeds the benchmark.\n");
    } else {
        out.push_str("The company's ESG performance is below the benchmark.\n");
    }

    section(&mut out, "Methodology");
    let _ = writeln!(
        out,
        "The ESG score was derived using sentiment analysis on the corporate report text \
         via {}. Financial data was sourced from Yahoo Finance.",
        assessment.method.describe()
    );

    section(&mut out, "Limitations");
    out.push_str(
        "This MVP uses a simplified scoring approach. In a production system, \
         more advanced NLP models and additional ESG factors should be incorporated.",
    );
    out
}
