use std::fmt;

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::domain::PriceSeries;
use crate::utils::maths_utils::round_dp;

/// Error types for metric computation
///
/// The degenerate inputs that would otherwise propagate silently as NaN or
/// infinity are surfaced here instead, so the caller can decide how to
/// display them (typically "N/A"). Benchmark trouble is not an error: beta
/// simply comes back absent while the asset's own metrics stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Fewer return observations than a sample statistic needs
    InsufficientData { required: usize, actual: usize },
    /// Zero return variance makes the Sharpe ratio undefined
    DegenerateSeries,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::InsufficientData { required, actual } => write!(
                f,
                "Insufficient data: {} usable returns, {} required",
                actual, required
            ),
            MetricsError::DegenerateSeries => {
                write!(f, "Degenerate series: returns have zero variance")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// The four risk metrics for one asset, each rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBundle {
    pub daily_volatility: f64,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
    /// Present only when a benchmark was supplied with enough usable overlap
    pub beta: Option<f64>,
}

/// Turn a price series (and optionally a benchmark) into risk metrics.
///
/// - Daily volatility: sample standard deviation of the log returns.
/// - Annual volatility: daily x sqrt(365), the always-on-market convention.
/// - Sharpe: (mean return / return std dev) x sqrt(365), zero risk-free rate.
/// - Beta: cov(asset, benchmark) / var(benchmark) over returns aligned on
///   shared timestamps (inner join; rows missing in either side are dropped).
///   Absent without a benchmark, and also when fewer than 2 returns align or
///   the benchmark returns have zero variance.
///
/// Inputs are borrowed and never mutated; all derived series are owned, so
/// reusing one benchmark across several comparison computations is safe.
pub fn compute_metrics(
    series: &PriceSeries,
    benchmark: Option<&PriceSeries>,
) -> Result<MetricBundle, MetricsError> {
    let min_returns = ANALYSIS.min_returns_for_metrics;

    // A sample standard deviation over a single return is NaN, not zero, so
    // the guard counts returns rather than prices.
    let returns = series.log_returns();
    if returns.len() < min_returns {
        return Err(MetricsError::InsufficientData {
            required: min_returns,
            actual: returns.len(),
        });
    }

    let daily_vol = returns.values.iter().std_dev();
    if daily_vol == 0.0 {
        return Err(MetricsError::DegenerateSeries);
    }

    let annualizer = (ANALYSIS.annualization_days as f64).sqrt();
    let annual_vol = daily_vol * annualizer;
    let sharpe = (returns.values.iter().mean() / daily_vol) * annualizer;

    // Benchmark shortfalls degrade beta to absent instead of voiding the
    // bundle; the asset's own metrics are well-defined either way.
    let beta = benchmark.and_then(|bench| {
        let (asset_aligned, bench_aligned) = returns.align(&bench.log_returns());
        if asset_aligned.len() < min_returns {
            return None;
        }

        let bench_variance = bench_aligned.iter().variance();
        if bench_variance == 0.0 {
            return None;
        }

        let covariance = asset_aligned.iter().covariance(bench_aligned.iter());
        Some(round_dp(covariance / bench_variance, ANALYSIS.metric_decimals))
    });

    let decimals = ANALYSIS.metric_decimals;
    Ok(MetricBundle {
        daily_volatility: round_dp(daily_vol, decimals),
        annual_volatility: round_dp(annual_vol, decimals),
        sharpe_ratio: round_dp(sharpe, decimals),
        beta,
    })
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
    fn test_increasing_series_has_non_negative_volatility() {
        let series = daily_series(vec![100.0, 105.0, 109.0, 120.0, 123.5, 140.0]);
        let bundle = compute_metrics(&series, None).unwrap();

        assert!(bundle.daily_volatility >= 0.0);
        assert!(bundle.annual_volatility >= 0.0);
        assert_eq!(bundle.beta, None, "no benchmark given, so no beta");
    }

    #[test]
    fn test_annual_volatility_is_daily_scaled_by_sqrt_365() {
        let series = daily_series(vec![100.0, 95.0, 104.0, 99.0, 108.0]);
        let bundle = compute_metrics(&series, None).unwrap();

        // Both values went through 4dp rounding independently, so compare at
        // the combined rounding tolerance (0.00005 * sqrt(365) + 0.00005).
        let expected = bundle.daily_volatility * 365f64.sqrt();
        assert!(
            (bundle.annual_volatility - expected).abs() < 2e-3,
            "annual {} vs daily-derived {}",
            bundle.annual_volatility,
            expected
        );
    }

    #[test]
    fn test_constant_series_is_degenerate_not_nan() {
        let series = daily_series(vec![42.0; 10]);
        let result = compute_metrics(&series, None);

        assert_eq!(result, Err(MetricsError::DegenerateSeries));
    }

    #[test]
    fn test_beta_against_itself_is_one() {
        let series = daily_series(vec![100.0, 101.5, 99.0, 104.0, 102.0, 110.0]);
        let bundle = compute_metrics(&series, Some(&series)).unwrap();

        let beta = bundle.beta.expect("benchmark supplied, beta expected");
        assert!((beta - 1.0).abs() < 1e-4, "self-beta was {}", beta);
    }

    #[test]
    fn test_beta_uses_only_aligned_rows() {
        let day = TimeUtils::MS_IN_D;
        let asset = PriceSeries::new(
            "asset".to_string(),
            vec![0, day, 2 * day, 3 * day, 5 * day],
            vec![100.0, 102.0, 101.0, 105.0, 104.0],
        )
        .unwrap();
        // Benchmark missing day 3, plus an extra day 4 the asset lacks
        let bench = PriceSeries::new(
            "bench".to_string(),
            vec![0, day, 2 * day, 4 * day, 5 * day],
            vec![50.0, 51.0, 50.5, 52.0, 53.0],
        )
        .unwrap();

        let bundle = compute_metrics(&asset, Some(&bench)).unwrap();
        assert!(bundle.beta.is_some());
    }

    #[test]
    fn test_too_few_returns_is_an_error() {
        // One price gives no returns at all
        assert_eq!(
            compute_metrics(&daily_series(vec![100.0]), None),
            Err(MetricsError::InsufficientData {
                required: 2,
                actual: 0
            })
        );
        // Two prices give a single return, whose sample standard deviation
        // is NaN rather than zero, so this must be an error too
        assert_eq!(
            compute_metrics(&daily_series(vec![100.0, 105.0]), None),
            Err(MetricsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_disjoint_benchmark_drops_beta_only() {
        let day = TimeUtils::MS_IN_D;
        let asset = daily_series(vec![100.0, 101.0, 103.0]);
        let bench = PriceSeries::new(
            "bench".to_string(),
            vec![100 * day, 101 * day, 102 * day],
            vec![10.0, 11.0, 12.0],
        )
        .unwrap();

        // No shared timestamps: beta is absent, the asset metrics survive
        let bundle = compute_metrics(&asset, Some(&bench)).unwrap();
        assert_eq!(bundle.beta, None);
        assert!(bundle.daily_volatility > 0.0);
        assert!(bundle.sharpe_ratio.is_finite());
    }

    #[test]
    fn test_flat_benchmark_drops_beta_only() {
        let asset = daily_series(vec![100.0, 101.0, 103.0, 102.0]);
        let bench = daily_series(vec![50.0; 4]);

        // Zero benchmark variance makes beta undefined, nothing else
        let bundle = compute_metrics(&asset, Some(&bench)).unwrap();
        assert_eq!(bundle.beta, None);
        assert!(bundle.annual_volatility > 0.0);
    }

    #[test]
    fn test_outputs_are_rounded_to_four_decimals() {
        let series = daily_series(vec![100.0, 103.0, 98.5, 107.2, 101.9, 111.0]);
        let bundle = compute_metrics(&series, Some(&series)).unwrap();

        for value in [
            bundle.daily_volatility,
            bundle.annual_volatility,
            bundle.sharpe_ratio,
            bundle.beta.unwrap(),
        ] {
            assert_eq!(value, round_dp(value, 4), "{} not at 4dp", value);
        }
    }
}
