//! Validation errors shared by every statistic.

/// Error returned when a sample fails validation.
///
/// Every public operation validates its input before computing anything,
/// so these are the only failures the crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
    /// The argument is not an ordered collection.
    NotASequence,
    /// The collection has no elements.
    EmptySequence,
    /// At least one element is not a number.
    NonNumericElement,
}

impl std::fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatisticsError::NotASequence => write!(f, "The passed argument is not an array."),
            StatisticsError::EmptySequence => write!(f, "The passed array contains no elements."),
            StatisticsError::NonNumericElement => {
                write!(f, "The passed array contains not just numbers.")
            }
        }
    }
}

impl std::error::Error for StatisticsError {}
