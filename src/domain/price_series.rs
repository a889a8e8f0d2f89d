use anyhow::{Result, bail};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::returns::ReturnSeries;
use crate::utils::TimeUtils;

// ============================================================================
// PriceSeries: one asset's (timestamp, price) history
// ============================================================================

/// A single asset's price history in a fixed quote currency.
///
/// Invariants (enforced by [`PriceSeries::new`]):
/// - timestamps strictly increase (no duplicates)
/// - every price is a positive, finite number
/// - both vectors have the same length
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceSeries {
    pub asset_id: String,
    pub timestamps_ms: Vec<i64>,
    pub prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(asset_id: String, timestamps_ms: Vec<i64>, prices: Vec<f64>) -> Result<Self> {
        if timestamps_ms.len() != prices.len() {
            bail!(
                "Series for {} has {} timestamps but {} prices",
                asset_id,
                timestamps_ms.len(),
                prices.len()
            );
        }

        if let Some(pos) = timestamps_ms.windows(2).position(|w| w[1] <= w[0]) {
            bail!(
                "Series for {} is not strictly increasing in time at row {} ({} then {})",
                asset_id,
                pos + 1,
                timestamps_ms[pos],
                timestamps_ms[pos + 1]
            );
        }

        if let Some(pos) = prices.iter().position(|p| !p.is_finite() || *p <= 0.0) {
            bail!(
                "Series for {} has a non-positive price {} at row {}",
                asset_id,
                prices[pos],
                pos
            );
        }

        Ok(PriceSeries {
            asset_id,
            timestamps_ms,
            prices,
        })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.first().copied()
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.last().copied()
    }

    /// Natural-log returns: element t is ln(price[t] / price[t-1]).
    ///
    /// The leading undefined return is dropped, so the result has length n-1.
    /// Each return carries the timestamp of its *later* price, which is what
    /// lets two return series be aligned on shared timestamps.
    pub fn log_returns(&self) -> ReturnSeries {
        let values = self
            .prices
            .iter()
            .tuple_windows()
            .map(|(prev, next)| (next / prev).ln())
            .collect();

        ReturnSeries {
            timestamps_ms: self.timestamps_ms.iter().skip(1).copied().collect(),
            values,
        }
    }

    /// Simple (percentage) returns, used by the rolling-volatility chart.
    pub fn simple_returns(&self) -> ReturnSeries {
        let values = self
            .prices
            .iter()
            .tuple_windows()
            .map(|(prev, next)| (next - prev) / prev)
            .collect();

        ReturnSeries {
            timestamps_ms: self.timestamps_ms.iter().skip(1).copied().collect(),
            values,
        }
    }

    /// Owned copy holding only the most recent `days` of history.
    ///
    /// The cutoff is anchored on the series' own last timestamp, not the wall
    /// clock, so stale CSV data still yields a sensible window. Returns the
    /// whole series when `days` covers everything.
    pub fn tail_days(&self, days: u64) -> PriceSeries {
        let Some(last_ts) = self.last_timestamp_ms() else {
            return self.clone();
        };

        let cutoff = last_ts - days as i64 * TimeUtils::MS_IN_D;
        let start = self.timestamps_ms.partition_point(|ts| *ts < cutoff);

        PriceSeries {
            asset_id: self.asset_id.clone(),
            timestamps_ms: self.timestamps_ms[start..].to_vec(),
            prices: self.prices[start..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(timestamps_ms: Vec<i64>, prices: Vec<f64>) -> PriceSeries {
        PriceSeries::new("testcoin".to_string(), timestamps_ms, prices).unwrap()
    }

    #[test]
    fn test_log_returns_drop_leading_point() {
        let s = series(vec![0, 1, 2, 3], vec![100.0, 110.0, 121.0, 133.1]);
        let returns = s.log_returns();

        assert_eq!(returns.len(), 3, "n prices produce n-1 returns");
        assert_eq!(returns.timestamps_ms, vec![1, 2, 3]);
        for value in &returns.values {
            // Each step is a constant +10% move
            assert!((value - 1.1f64.ln()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_series_has_zero_returns() {
        let s = series(vec![0, 1, 2], vec![50.0, 50.0, 50.0]);
        assert!(s.log_returns().values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_rejects_duplicate_timestamps() {
        let result = PriceSeries::new("x".to_string(), vec![0, 1, 1], vec![1.0, 2.0, 3.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_positive_prices() {
        let result = PriceSeries::new("x".to_string(), vec![0, 1], vec![1.0, 0.0]);
        assert!(result.is_err());
        let result = PriceSeries::new("x".to_string(), vec![0, 1], vec![1.0, -3.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tail_days_anchors_on_last_timestamp() {
        let day = TimeUtils::MS_IN_D;
        let s = series(
            vec![0, day, 2 * day, 3 * day],
            vec![1.0, 2.0, 3.0, 4.0],
        );

        let tail = s.tail_days(2);
        assert_eq!(tail.timestamps_ms, vec![day, 2 * day, 3 * day]);
        assert_eq!(tail.prices, vec![2.0, 3.0, 4.0]);

        // A window covering everything returns the full series
        assert_eq!(s.tail_days(100).len(), 4);
    }
}
