//! Text rendition of a closing-price series.

use greeninvest_types::PriceSeries;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// First/last/min/max closes over a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    /// First close in the window.
    pub first: f64,
    /// Last close in the window.
    pub last: f64,
    /// Lowest close.
    pub min: f64,
    /// Highest close.
    pub max: f64,
}

impl PriceSummary {
    /// Summarize `series`; `None` when it is empty.
    #[must_use]
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        let first = series.points.first()?.close;
        let last = series.points.last()?.close;
        let (min, max) = series
            .closes()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c), hi.max(c))
            });
        Some(Self {
            first,
            last,
            min,
            max,
        })
    }

    /// Percent change from first to last close; `None` if the first close is zero.
    #[must_use]
    pub fn change_pct(&self) -> Option<f64> {
        (self.first != 0.0).then(|| (self.last - self.first) / self.first * 100.0)
    }
}

/// Render closes as a one-line block sparkline of at most `width` columns.
///
/// When the series is longer than `width`, consecutive closes are averaged
/// into buckets. A flat series renders at mid height.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_sparkline(series: &PriceSeries, width: usize) -> String {
    if series.is_empty() || width == 0 {
        return String::new();
    }
    let closes: Vec<f64> = series.closes().collect();
    let columns = closes.len().min(width);
    let buckets: Vec<f64> = (0..columns)
        .map(|c| {
            let start = c * closes.len() / columns;
            let end = ((c + 1) * closes.len() / columns).max(start + 1);
            let slice = &closes[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect();

    let lo = buckets.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = buckets.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    let top = BLOCKS.len() - 1;
    buckets
        .iter()
        .map(|v| {
            let idx = if span > 0.0 {
                (((v - lo) / span) * top as f64).round() as usize
            } else {
                top / 2
            };
            BLOCKS[idx.min(top)]
        })
        .collect()
}

/// Multi-line chart block: title, sparkline, and summary line.
#[must_use]
pub fn render_price_chart(series: &PriceSeries, title: &str, width: usize) -> String {
    let Some(summary) = PriceSummary::from_series(series) else {
        return "Unable to retrieve stock data.".to_string();
    };
    let change = summary
        .change_pct()
        .map_or_else(|| "n/a".to_string(), |p| format!("{p:+.2}%"));
    format!(
        "{title}\n{}\nstart {:.2}  end {:.2}  low {:.2}  high {:.2}  change {change}",
        render_sparkline(series, width),
        summary.first,
        summary.last,
        summary.min,
        summary.max,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use greeninvest_types::{PricePoint, Ticker};

    fn series(closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, c)| PricePoint {
                ts: Utc
                    .timestamp_opt(1_700_000_000 + i64::try_from(i).unwrap() * 86_400, 0)
                    .unwrap(),
                close: *c,
            })
            .collect();
        PriceSeries::new(Ticker::parse("TEST").unwrap(), points)
    }

    #[test]
    fn sparkline_spans_lowest_to_highest_block() {
        let s = render_sparkline(&series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]), 8);
        assert_eq!(s, "▁▂▃▄▅▆▇█");
    }

    #[test]
    fn sparkline_buckets_long_series_to_width() {
        let closes: Vec<f64> = (0..250).map(f64::from).collect();
        let s = render_sparkline(&series(&closes), 40);
        assert_eq!(s.chars().count(), 40);
        assert_eq!(s.chars().next(), Some('▁'));
        assert_eq!(s.chars().last(), Some('█'));
    }

    #[test]
    fn flat_series_renders_mid_height() {
        let s = render_sparkline(&series(&[5.0, 5.0, 5.0]), 10);
        assert_eq!(s, "▄▄▄");
    }

    #[test]
    fn summary_reports_change() {
        let sum = PriceSummary::from_series(&series(&[100.0, 80.0, 120.0, 110.0])).unwrap();
        assert!((sum.min - 80.0).abs() < f64::EPSILON);
        assert!((sum.max - 120.0).abs() < f64::EPSILON);
        assert!((sum.change_pct().unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_renders_unavailable_message() {
        let out = render_price_chart(&series(&[]), "TEST", 20);
        assert_eq!(out, "Unable to retrieve stock data.");
    }
}
