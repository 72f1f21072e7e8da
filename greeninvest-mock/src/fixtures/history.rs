use chrono::DateTime;
use greeninvest_core::{HistoryRange, PricePoint, PriceSeries, Ticker};

// 2024-01-02T00:00:00Z
const START_TS: i64 = 1_704_153_600;
const DAY: i64 = 86_400;

const fn trading_days(range: HistoryRange) -> u32 {
    match range {
        HistoryRange::OneMonth => 21,
        HistoryRange::ThreeMonths => 63,
        HistoryRange::SixMonths => 126,
        HistoryRange::TwoYears => 504,
        HistoryRange::FiveYears => 1260,
        _ => 252,
    }
}

/// `(base close, daily drift, wave amplitude)` per symbol.
fn shape(s: &str) -> Option<(f64, f64, f64)> {
    match s {
        "AAPL" => Some((185.0, 0.0006, 6.0)),
        "MSFT" => Some((370.0, 0.0009, 9.0)),
        "TSLA" => Some((248.0, -0.0004, 22.0)),
        _ => None,
    }
}

pub fn by_symbol(ticker: &Ticker, range: HistoryRange) -> Option<PriceSeries> {
    if ticker.as_str() == "EMPTY" {
        return Some(PriceSeries::empty(ticker.clone()));
    }
    let (base, drift, amplitude) = shape(ticker.as_str())?;
    let points = (0..trading_days(range))
        .filter_map(|i| {
            let x = f64::from(i);
            let ts = DateTime::from_timestamp(START_TS + i64::from(i) * DAY, 0)?;
            let close = base.mul_add(1.0 + drift * x, amplitude * (x / 9.0).sin());
            Some(PricePoint { ts, close })
        })
        .collect();
    Some(PriceSeries::new(ticker.clone(), points))
}
