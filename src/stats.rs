//! Descriptive statistics over a single sample.
//!
//! Every function validates its input through [`Numbers`] before computing
//! and propagates the [`StatisticsError`] unchanged. Inputs are borrowed
//! immutably; functions that need an ordering sort a private copy.
//!
//! # Conventions
//!
//! - **Mean**: plain left-to-right sum divided by the count.
//! - **Standard deviation**: population form (denominator `n`).
//! - **Median**: average of the two middle elements for even counts.
//! - **Mode**: all values tied for the highest frequency, ascending.
//!
//! NaN and infinities are not rejected. Sorting uses [`f64::total_cmp`];
//! a NaN element makes the extrema, range, and mean NaN.

use std::collections::HashMap;

use crate::error::StatisticsError;
use crate::input::Numbers;

/// Returns the greatest element.
///
/// # Errors
/// Propagates the validation error for the input.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::maximum;
/// assert_eq!(maximum(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(5.0));
/// assert_eq!(maximum(&[-42.0, -84.0, -2.0, -3.0]), Ok(-2.0));
/// ```
pub fn maximum<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(max_of(&values))
}

/// Returns the least element.
///
/// # Errors
/// Propagates the validation error for the input.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::minimum;
/// assert_eq!(minimum(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(1.0));
/// ```
pub fn minimum<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(min_of(&values))
}

/// Returns the spread between the greatest and least element.
///
/// Always non-negative; zero for a single element or constant data.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::range;
/// assert_eq!(range(&[4.0, 2.0, 6.0, 1.0]), Ok(5.0));
/// assert_eq!(range(&[7.0]), Ok(0.0));
/// ```
pub fn range<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(range_of(&values))
}

/// Computes the arithmetic mean.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::mean;
/// assert_eq!(mean(&[4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0]), Ok(3.875));
/// ```
pub fn mean<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(mean_of(&values))
}

/// Computes the median without mutating the input.
///
/// Sorts a copy ascending and returns the middle element, or the average
/// of the lower-middle and upper-middle elements for even-length data.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use descriptive_stats::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(median_of(&values))
}

/// Computes the population standard deviation.
///
/// # Formula
/// ```text
/// σ = √( Σ(xᵢ − x̄)² / n )
/// ```
///
/// The mean is taken once over the original input. Returns exactly `0`
/// for a single element.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::standard_deviation;
/// let sd = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn standard_deviation<N: Numbers + ?Sized>(numbers: &N) -> Result<f64, StatisticsError> {
    let values = numbers.validated()?;
    Ok(standard_deviation_of(&values))
}

/// Returns every value tied for the highest frequency, ascending and
/// without duplicates.
///
/// Values are grouped by exact equality. When every value is distinct,
/// all of them tie at frequency one and are all returned.
///
/// # Examples
/// ```
/// use descriptive_stats::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Ok(vec![2.0]));
/// assert_eq!(mode(&[3.0, 1.0, 2.0]), Ok(vec![1.0, 2.0, 3.0]));
/// ```
pub fn mode<N: Numbers + ?Sized>(numbers: &N) -> Result<Vec<f64>, StatisticsError> {
    let values = numbers.validated()?;
    Ok(mode_of(&values))
}

// ---------------------------------------------------------------------------
// Kernels over validated, non-empty data
// ---------------------------------------------------------------------------

pub(crate) fn max_of(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .try_fold(f64::NEG_INFINITY, |acc, x| (!x.is_nan()).then(|| acc.max(x)))
        .unwrap_or(f64::NAN)
}

pub(crate) fn min_of(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .try_fold(f64::INFINITY, |acc, x| (!x.is_nan()).then(|| acc.min(x)))
        .unwrap_or(f64::NAN)
}

pub(crate) fn range_of(values: &[f64]) -> f64 {
    max_of(values) - min_of(values)
}

pub(crate) fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn median_of(values: &[f64]) -> f64 {
    let sorted = sorted_copy(values);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        let (lower, upper) = (sorted[n / 2 - 1], sorted[n / 2]);
        // Halve first so two large finite values cannot overflow; halving
        // a subnormal can round below `lower`, hence the clamp.
        (lower / 2.0 + upper / 2.0).max(lower).min(upper)
    }
}

pub(crate) fn standard_deviation_of(values: &[f64]) -> f64 {
    // The rounded sum can push the mean outside [min, max]; clamping keeps
    // constant samples at exactly zero.
    let m = mean_of(values).max(min_of(values)).min(max_of(values));
    let squared_deviations: f64 = values
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum();
    (squared_deviations / values.len() as f64).sqrt()
}

pub(crate) fn mode_of(values: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &x in values {
        *counts.entry(frequency_key(x)).or_insert(0) += 1;
    }
    let highest = counts.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count == highest)
        .map(|(key, _)| f64::from_bits(key))
        .collect();
    modes.sort_unstable_by(f64::total_cmp);
    modes
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Bit pattern under which `x` is counted: `-0.0` folds into `0.0` and
/// every NaN into the canonical NaN.
fn frequency_key(x: f64) -> u64 {
    if x == 0.0 {
        0.0_f64.to_bits()
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
