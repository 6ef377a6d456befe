//! Small statistical helpers shared by the emoji sentiment crates.
//!
//! This crate has no knowledge of emojis or CSV files. It provides:
//!
//! - **Descriptive statistics**: mean, median, min/max and dispersion of a dataset
//! - **Ranking**: stable top-k selection and first-wins arg-max/arg-min
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`ranking`]: Order-preserving selection helpers
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use emosent_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Selecting the largest items
//!
//! ```
//! use emosent_stats::ranking;
//!
//! let counts = [3_u32, 9, 1, 9, 4];
//! let top = ranking::top_k_by(&counts, 3, Ord::cmp);
//! assert_eq!(top, vec![&9, &9, &4]);
//! ```

pub mod descriptive;
pub mod ranking;
