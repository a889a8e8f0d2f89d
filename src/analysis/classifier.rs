use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;

/// Qualitative risk bucket for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    High,
    Medium,
    Low,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::High => "High Risk",
            RiskLabel::Medium => "Medium Risk",
            RiskLabel::Low => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket an asset by (daily volatility, Sharpe ratio). First match wins:
/// volatile with a weak Sharpe is High Risk, merely volatile is Medium Risk,
/// everything else is Low Risk.
///
/// Total over all f64 inputs. Comparisons against NaN are false, so a NaN
/// volatility falls through both gates and lands on Low Risk.
pub fn classify_risk(daily_volatility: f64, sharpe_ratio: f64) -> RiskLabel {
    let thresholds = &ANALYSIS.risk;

    if daily_volatility > thresholds.high_volatility && sharpe_ratio < thresholds.min_healthy_sharpe
    {
        RiskLabel::High
    } else if daily_volatility > thresholds.medium_volatility {
        RiskLabel::Medium
    } else {
        RiskLabel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_needs_both_gates() {
        assert_eq!(classify_risk(0.081, 0.99), RiskLabel::High);
        // Healthy Sharpe keeps a volatile asset out of High Risk
        assert_eq!(classify_risk(0.081, 1.0), RiskLabel::Medium);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        // Exactly 0.08 is not > 0.08, so it falls to the Medium gate
        assert_eq!(classify_risk(0.08, 0.5), RiskLabel::Medium);
        // Exactly 0.04 is not > 0.04 either
        assert_eq!(classify_risk(0.04, 5.0), RiskLabel::Low);
    }

    #[test]
    fn test_sharpe_irrelevant_below_high_gate() {
        assert_eq!(classify_risk(0.05, 5.0), RiskLabel::Medium);
        assert_eq!(classify_risk(0.05, -5.0), RiskLabel::Medium);
    }

    #[test]
    fn test_non_finite_inputs_fall_through() {
        // NaN comparisons are false on both gates
        assert_eq!(classify_risk(f64::NAN, 0.5), RiskLabel::Low);
        // NaN Sharpe blocks the High gate but not the Medium one
        assert_eq!(classify_risk(0.09, f64::NAN), RiskLabel::Medium);
        assert_eq!(classify_risk(f64::INFINITY, 0.0), RiskLabel::High);
    }

    #[test]
    fn test_labels_render_as_display_strings() {
        assert_eq!(RiskLabel::High.to_string(), "High Risk");
        assert_eq!(RiskLabel::Medium.to_string(), "Medium Risk");
        assert_eq!(RiskLabel::Low.to_string(), "Low Risk");
    }
}
