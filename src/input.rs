//! Sample input and validation.
//!
//! Statistics accept anything implementing [`Numbers`]. Native slices,
//! arrays, and vectors are numeric by construction, so only emptiness can
//! fail. A [`serde_json::Value`] is dynamically typed and runs the full
//! check sequence:
//!
//! 1. the value must be an array ([`StatisticsError::NotASequence`]),
//! 2. the array must be non-empty ([`StatisticsError::EmptySequence`]),
//! 3. every element must be a number ([`StatisticsError::NonNumericElement`]).
//!
//! NaN and infinities are accepted as numbers.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::StatisticsError;

/// A candidate sample of numbers.
pub trait Numbers {
    /// Checks the sample and returns its values.
    ///
    /// Native numeric collections are borrowed; decoded inputs are copied
    /// into a fresh buffer. The original is never modified.
    fn validated(&self) -> Result<Cow<'_, [f64]>, StatisticsError>;
}

impl Numbers for [f64] {
    fn validated(&self) -> Result<Cow<'_, [f64]>, StatisticsError> {
        if self.is_empty() {
            return Err(StatisticsError::EmptySequence);
        }
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> Numbers for [f64; N] {
    fn validated(&self) -> Result<Cow<'_, [f64]>, StatisticsError> {
        self.as_slice().validated()
    }
}

impl Numbers for Vec<f64> {
    fn validated(&self) -> Result<Cow<'_, [f64]>, StatisticsError> {
        self.as_slice().validated()
    }
}

impl Numbers for Value {
    fn validated(&self) -> Result<Cow<'_, [f64]>, StatisticsError> {
        let items = self.as_array().ok_or(StatisticsError::NotASequence)?;
        if items.is_empty() {
            return Err(StatisticsError::EmptySequence);
        }
        items
            .iter()
            .map(|item| item.as_f64().ok_or(StatisticsError::NonNumericElement))
            .collect::<Result<Vec<f64>, _>>()
            .map(Cow::Owned)
    }
}

/// Validates a sample and returns its values.
///
/// # Errors
/// - [`StatisticsError::NotASequence`] if the input is not an array.
/// - [`StatisticsError::EmptySequence`] if it has no elements.
/// - [`StatisticsError::NonNumericElement`] if any element is not a number.
///
/// # Examples
/// ```
/// use descriptive_stats::input::validate;
/// use descriptive_stats::StatisticsError;
/// use serde_json::json;
///
/// assert_eq!(validate(&[1.0, 2.0]).unwrap().as_ref(), &[1.0, 2.0]);
/// assert_eq!(validate(&json!("1, 2")), Err(StatisticsError::NotASequence));
/// assert_eq!(validate(&json!([])), Err(StatisticsError::EmptySequence));
/// assert_eq!(validate(&json!([1, "2"])), Err(StatisticsError::NonNumericElement));
/// ```
pub fn validate<N: Numbers + ?Sized>(numbers: &N) -> Result<Cow<'_, [f64]>, StatisticsError> {
    numbers.validated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slice_borrowed() {
        let data = [4.0, 2.0, 6.0];
        let values = validate(&data[..]).unwrap();
        assert!(matches!(values, Cow::Borrowed(_)));
        assert_eq!(values.as_ref(), &[4.0, 2.0, 6.0]);
    }

    #[test]
    fn test_vec_and_array() {
        assert_eq!(validate(&vec![1.0]).unwrap().as_ref(), &[1.0]);
        assert_eq!(validate(&[1.0, 2.0, 3.0]).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_native() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(validate(&empty), Err(StatisticsError::EmptySequence));
        assert_eq!(validate(&[0.0_f64; 0]), Err(StatisticsError::EmptySequence));
    }

    #[test]
    fn test_not_a_sequence() {
        for value in [json!(1), json!("not an array"), json!(false), Value::Null, json!({})] {
            assert_eq!(validate(&value), Err(StatisticsError::NotASequence), "{value}");
        }
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(validate(&json!([])), Err(StatisticsError::EmptySequence));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(
            validate(&json!([1, 2, 3, "4"])),
            Err(StatisticsError::NonNumericElement)
        );
        assert_eq!(
            validate(&json!([1, null])),
            Err(StatisticsError::NonNumericElement)
        );
        assert_eq!(
            validate(&json!([[1], 2])),
            Err(StatisticsError::NonNumericElement)
        );
    }

    #[test]
    fn test_json_numbers_are_owned_f64() {
        let input = json!([4, -2, 6.5]);
        let values = validate(&input).unwrap();
        assert!(matches!(values, Cow::Owned(_)));
        assert_eq!(values.as_ref(), &[4.0, -2.0, 6.5]);
    }

    #[test]
    fn test_nan_and_infinity_accepted() {
        let data = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        assert_eq!(validate(&data).unwrap().len(), 3);
    }
}
