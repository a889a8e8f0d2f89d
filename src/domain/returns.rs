use serde::{Deserialize, Serialize};

/// A derived return series. Always one element shorter than the price series
/// it came from; each value is stamped with the timestamp of the later price.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ReturnSeries {
    pub timestamps_ms: Vec<i64>,
    pub values: Vec<f64>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inner join with `other` on shared timestamps.
    ///
    /// Rows present in only one of the two series are dropped, mirroring how
    /// two assets' histories with different gaps get reconciled before a beta
    /// computation. Both inputs are already sorted (a `PriceSeries` invariant)
    /// so this is a single merge pass.
    pub fn align(&self, other: &ReturnSeries) -> (Vec<f64>, Vec<f64>) {
        let mut left = Vec::new();
        let mut right = Vec::new();

        let mut i = 0;
        let mut j = 0;
        while i < self.len() && j < other.len() {
            match self.timestamps_ms[i].cmp(&other.timestamps_ms[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    left.push(self.values[i]);
                    right.push(other.values[j]);
                    i += 1;
                    j += 1;
                }
            }
        }

        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn returns(timestamps_ms: Vec<i64>, values: Vec<f64>) -> ReturnSeries {
        ReturnSeries {
            timestamps_ms,
            values,
        }
    }

    #[test]
    fn test_align_keeps_only_shared_timestamps() {
        let a = returns(vec![1, 2, 3, 5], vec![0.1, 0.2, 0.3, 0.5]);
        let b = returns(vec![2, 3, 4, 5], vec![1.2, 1.3, 1.4, 1.5]);

        let (left, right) = a.align(&b);
        assert_eq!(left, vec![0.2, 0.3, 0.5]);
        assert_eq!(right, vec![1.2, 1.3, 1.5]);
    }

    #[test]
    fn test_align_with_no_overlap_is_empty() {
        let a = returns(vec![1, 2], vec![0.1, 0.2]);
        let b = returns(vec![3, 4], vec![1.3, 1.4]);

        let (left, right) = a.align(&b);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn test_align_identical_series_keeps_everything() {
        let a = returns(vec![1, 2, 3], vec![0.1, 0.2, 0.3]);
        let (left, right) = a.align(&a.clone());
        assert_eq!(left, right);
        assert_eq!(left.len(), 3);
    }
}
