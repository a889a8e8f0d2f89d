use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Round to `decimals` decimal places, halves away from zero.
/// This is the rounding every reported metric goes through before display.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp_half_away_from_zero() {
        // Pins the rounding convention: 0.123456 reports as 0.1235, and the
        // 0.12345 half-way case goes away from zero (f64::round semantics).
        assert_eq!(round_dp(0.123456, 4), 0.1235);
        assert_eq!(round_dp(0.12345, 4), 0.1235);
        assert_eq!(round_dp(-0.12345, 4), -0.1235);
        assert_eq!(round_dp(1.0, 4), 1.0);
    }

    #[test]
    fn test_min_max() {
        let values = [3.0, -1.5, 7.25, 0.0];
        assert_eq!(get_min(&values), -1.5);
        assert_eq!(get_max(&values), 7.25);
    }
}
