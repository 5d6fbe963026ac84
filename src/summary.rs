//! Aggregate descriptive statistics.

use serde::Serialize;

use crate::error::StatisticsError;
use crate::input::Numbers;
use crate::stats;

/// All seven descriptive statistics of one sample.
///
/// Built by [`descriptive_statistics`]; read-only afterwards. Serializes
/// with camelCase keys (`standardDeviation`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStatistics {
    maximum: f64,
    mean: f64,
    median: f64,
    minimum: f64,
    mode: Vec<f64>,
    range: f64,
    standard_deviation: f64,
}

impl DescriptiveStatistics {
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Most frequent values, ascending and unique.
    pub fn mode(&self) -> &[f64] {
        &self.mode
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Population standard deviation.
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }
}

/// Computes maximum, mean, median, minimum, mode, range, and standard
/// deviation in one call.
///
/// The input is validated once and never modified.
///
/// # Errors
/// Propagates the validation error for the input.
///
/// # Examples
/// ```
/// use descriptive_stats::descriptive_statistics;
/// let s = descriptive_statistics(&[42.0]).unwrap();
/// assert_eq!(s.maximum(), 42.0);
/// assert_eq!(s.mode(), &[42.0]);
/// assert_eq!(s.range(), 0.0);
/// assert_eq!(s.standard_deviation(), 0.0);
/// ```
pub fn descriptive_statistics<N: Numbers + ?Sized>(
    numbers: &N,
) -> Result<DescriptiveStatistics, StatisticsError> {
    let values = numbers.validated()?;
    Ok(DescriptiveStatistics {
        maximum: stats::max_of(&values),
        mean: stats::mean_of(&values),
        median: stats::median_of(&values),
        minimum: stats::min_of(&values),
        mode: stats::mode_of(&values),
        range: stats::range_of(&values),
        standard_deviation: stats::standard_deviation_of(&values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_element() {
        let s = descriptive_statistics(&[42.0]).unwrap();
        assert_eq!(
            s,
            DescriptiveStatistics {
                maximum: 42.0,
                mean: 42.0,
                median: 42.0,
                minimum: 42.0,
                mode: vec![42.0],
                range: 0.0,
                standard_deviation: 0.0,
            }
        );
    }

    #[test]
    fn test_sample() {
        let s = descriptive_statistics(&[4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0]).unwrap();
        assert_eq!(s.maximum(), 7.0);
        assert_eq!(s.mean(), 3.875);
        assert_eq!(s.median(), 3.5);
        assert_eq!(s.minimum(), 1.0);
        assert_eq!(s.mode(), &[3.0]);
        assert_eq!(s.range(), 6.0);
        assert!((s.standard_deviation() - 1.899835519196333).abs() < 1e-12);
    }

    #[test]
    fn test_matches_individual_statistics() {
        let data = vec![5.0, 1.0, 1.0, 1.0, 3.0, -2.0, 2.0, 5.0, 7.0, 4.0, 5.0, 16.0];
        let s = descriptive_statistics(&data).unwrap();
        assert_eq!(s.maximum(), stats::maximum(&data).unwrap());
        assert_eq!(s.mean(), stats::mean(&data).unwrap());
        assert_eq!(s.median(), stats::median(&data).unwrap());
        assert_eq!(s.minimum(), stats::minimum(&data).unwrap());
        assert_eq!(s.mode(), stats::mode(&data).unwrap().as_slice());
        assert_eq!(s.range(), stats::range(&data).unwrap());
        assert_eq!(s.standard_deviation(), stats::standard_deviation(&data).unwrap());
        assert_eq!(s.mode(), &[1.0, 5.0]);
    }

    #[test]
    fn test_input_not_modified() {
        let arg = vec![4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0];
        descriptive_statistics(&arg).unwrap();
        assert_eq!(arg, vec![4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            descriptive_statistics(&json!("not an array")),
            Err(StatisticsError::NotASequence)
        );
        assert_eq!(
            descriptive_statistics(&json!([])),
            Err(StatisticsError::EmptySequence)
        );
        assert_eq!(
            descriptive_statistics(&json!([1, 2, 3, "4"])),
            Err(StatisticsError::NonNumericElement)
        );
    }

    #[test]
    fn test_serialized_keys() {
        let s = descriptive_statistics(&json!([4, 8, 2, 4, 5])).unwrap();
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "maximum": 8.0,
                "mean": 4.6,
                "median": 4.0,
                "minimum": 2.0,
                "mode": [4.0],
                "range": 6.0,
                "standardDeviation": s.standard_deviation(),
            })
        );
    }
}
