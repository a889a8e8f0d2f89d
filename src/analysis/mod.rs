// Risk analytics: the metric engine, the classifier and chart helpers
pub mod classifier;
pub mod metrics;
pub mod rolling;

// Re-export commonly used types
pub use classifier::{RiskLabel, classify_risk};
pub use metrics::{MetricBundle, MetricsError, compute_metrics};
pub use rolling::rolling_volatility;
