use greeninvest_core::{Metric, MetricSet};

pub fn by_symbol(s: &str) -> Option<MetricSet> {
    let values: [Option<f64>; 9] = match s {
        "AAPL" => [
            Some(2.95e12),
            Some(30.12),
            Some(0.061),
            Some(0.2531),
            Some(0.3076),
            Some(1.5608),
            Some(3.8529e11),
            Some(151.862),
            Some(0.867),
        ],
        "MSFT" => [
            Some(3.12e12),
            Some(35.4),
            Some(0.152),
            Some(0.3604),
            Some(0.4462),
            Some(0.3565),
            Some(2.4512e11),
            Some(33.66),
            Some(1.27),
        ],
        // Sparse on purpose: several values unknown.
        "TSLA" => [
            Some(7.8e11),
            None,
            Some(-0.092),
            Some(0.1312),
            None,
            Some(0.2318),
            Some(9.69e10),
            None,
            Some(1.73),
        ],
        "EMPTY" => return Some(MetricSet::empty()),
        _ => return None,
    };
    Some(MetricSet::from_values(Metric::ALL.into_iter().zip(values)))
}
