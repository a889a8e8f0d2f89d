//! Analysis and computation configuration

/// Thresholds for the three-bucket risk classifier.
///
/// Evaluated in order: volatile AND weak Sharpe is High Risk, merely volatile
/// is Medium Risk, everything else is Low Risk.
pub struct RiskThresholds {
    // Daily volatility above this (exclusive) is the High Risk gate
    pub high_volatility: f64,
    // Daily volatility above this (exclusive) is the Medium Risk gate
    pub medium_volatility: f64,
    // Sharpe at or above this keeps a volatile asset out of High Risk
    pub min_healthy_sharpe: f64,
}

/// Configuration for the history lookback UI slider
pub struct LookbackConfig {
    pub min_days: u64,
    pub max_days: u64,
    pub default_days: u64,
}

/// Configuration for the rolling volatility window UI slider
pub struct RollingWindowConfig {
    pub min_days: usize,
    pub max_days: usize,
    pub default_days: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Crypto trades every day of the year, so annualization uses 365
    // rather than the 252 trading days an equity desk would use.
    pub annualization_days: u32,
    // Reported metrics are rounded to this many decimal places
    pub metric_decimals: u32,
    // Fewer return observations than this and no sample statistic is defined
    pub min_returns_for_metrics: usize,

    // Sub-groups
    pub risk: RiskThresholds,
    pub lookback: LookbackConfig,
    pub rolling: RollingWindowConfig,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    annualization_days: 365,
    metric_decimals: 4,
    min_returns_for_metrics: 2,

    risk: RiskThresholds {
        high_volatility: 0.08,
        medium_volatility: 0.04,
        min_healthy_sharpe: 1.0,
    },

    lookback: LookbackConfig {
        min_days: 7,
        max_days: 365,
        default_days: 365,
    },

    rolling: RollingWindowConfig {
        min_days: 7,
        max_days: 60,
        default_days: 30,
    },
};
