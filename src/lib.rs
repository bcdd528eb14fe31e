//! Classic divide-and-conquer algorithms, instrumented.
//!
//! Comparison sorting (stable merge sort, randomized quicksort), worst-case
//! linear order-statistic selection, and planar closest-pair search. Every
//! algorithm threads a [`Metrics`] sink through its recursion, recording
//! element comparisons, auxiliary-buffer sizes and recursion depth for the
//! caller to inspect afterwards.
//!
//! The sorters and `select` operate on in-memory slices of `Ord + Copy`
//! keys; closest pair operates on 2-D [`Point`]s. This is deliberately not
//! a general sorting framework: no streams, no external storage, no
//! caller-supplied comparators.
//!
//! # Example
//!
//! ```
//! use divconq::{stable, Metrics};
//!
//! let mut data = [64, 34, 25, 12, 22, 11, 90, 5, 77, 42];
//! let mut metrics = Metrics::new();
//! stable::merge::sort(&mut data, &mut metrics);
//! assert_eq!(data, [5, 11, 12, 22, 25, 34, 42, 64, 77, 90]);
//! assert!(metrics.comparisons() > 0);
//! ```

pub mod closest_pair;
mod error;
mod metrics;
pub mod select;
pub mod stable;
pub mod unstable;
pub mod util;

pub use closest_pair::{closest_pair_distance, Point};
pub use error::DivConqError;
pub use metrics::Metrics;
pub use select::select;
