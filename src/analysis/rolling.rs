use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::domain::PriceSeries;

/// Rolling annualized volatility over simple returns, for the chart.
///
/// Each output point is the sample standard deviation of the last `window`
/// percentage returns, scaled by sqrt(365), stamped with the window-ending
/// timestamp. Shorter histories than the window produce an empty result.
pub fn rolling_volatility(series: &PriceSeries, window: usize) -> Vec<(i64, f64)> {
    let returns = series.simple_returns();
    if window < 2 || returns.len() < window {
        return Vec::new();
    }

    let annualizer = (ANALYSIS.annualization_days as f64).sqrt();

    returns
        .values
        .windows(window)
        .zip(returns.timestamps_ms[window - 1..].iter())
        .map(|(chunk, &ts)| (ts, chunk.iter().std_dev() * annualizer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn daily_series(prices: Vec<f64>) -> PriceSeries {
        let timestamps = (0..prices.len() as i64)
            .map(|i| i * TimeUtils::MS_IN_D)
            .collect();
        PriceSeries::new("testcoin".to_string(), timestamps, prices).unwrap()
    }

    #[test]
    fn test_output_length_and_timestamps() {
        // 8 prices -> 7 returns -> 5 windows of 3
        let series = daily_series(vec![10.0, 11.0, 10.5, 12.0, 11.8, 12.5, 13.0, 12.2]);
        let points = rolling_volatility(&series, 3);

        assert_eq!(points.len(), 5);
        // First window covers returns 1..=3, so it is stamped with day 3
        assert_eq!(points[0].0, 3 * TimeUtils::MS_IN_D);
        assert_eq!(points.last().unwrap().0, 7 * TimeUtils::MS_IN_D);
    }

    #[test]
    fn test_flat_prices_give_zero_volatility() {
        let series = daily_series(vec![5.0; 10]);
        let points = rolling_volatility(&series, 4);
        assert!(!points.is_empty());
        assert!(points.iter().all(|(_, v)| *v == 0.0));
    }

    #[test]
    fn test_short_history_yields_nothing() {
        let series = daily_series(vec![10.0, 11.0, 12.0]);
        assert!(rolling_volatility(&series, 30).is_empty());
    }
}
