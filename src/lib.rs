//! # descriptive-stats
//!
//! Descriptive statistics over a finite, non-empty sample of numbers:
//! maximum, minimum, mean, median, mode, range, and population standard
//! deviation.
//!
//! ## Modules
//!
//! - [`input`]: Sample input trait ([`Numbers`]) and validation
//! - [`stats`]: The individual statistics
//! - [`summary`]: All statistics at once ([`descriptive_statistics`])
//! - [`error`]: Validation error kinds
//!
//! ## Design Philosophy
//!
//! - **Validate first**: every operation checks its input before computing
//! - **Read-only inputs**: samples are borrowed; sorting happens on a copy
//! - **Pure**: no I/O and no shared state
//!
//! ```
//! use descriptive_stats::descriptive_statistics;
//! use serde_json::json;
//!
//! let s = descriptive_statistics(&json!([4, 2, 6, 1, 3, 7, 5, 3])).unwrap();
//! assert_eq!(s.mean(), 3.875);
//! assert_eq!(s.median(), 3.5);
//! assert_eq!(s.mode(), &[3.0]);
//! ```

pub mod error;
pub mod input;
pub mod stats;
pub mod summary;

pub use error::StatisticsError;
pub use input::{validate, Numbers};
pub use summary::{descriptive_statistics, DescriptiveStatistics};
