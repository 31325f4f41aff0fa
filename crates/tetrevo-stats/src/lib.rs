//! Small statistics helpers shared by the training tools.
//!
//! The trainer reports per-generation fitness summaries; this crate provides
//! the [`descriptive::DescriptiveStats`] type those reports are built from.
//!
//! # Example
//!
//! ```
//! use tetrevo_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
