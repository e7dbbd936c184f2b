//! # pairsort
//!
//! `pairsort` sorts a slice of non-negative integer keys in place while carrying a parallel
//! slice of values along with them: whenever `keys[i]` moves, `values[i]` moves with it.
//!
//! It is built for ranking large collections by a numeric metric, such as ordering object
//! ids by retained heap size, where tens of millions of pairs make a comparator sort over
//! tuples too slow and too memory hungry.
//!
//! ## Key Features
//!
//! - **Hybrid Strategy**: Ranges of up to [`RADIX_THRESHOLD`] pairs are LSD radix sorted in
//!   four 8-bit passes; larger ranges are first split by a median-of-three quicksort
//!   partition so the radix scratch space never exceeds the threshold.
//! - **Both Directions**: Ascending ([`sort`], [`sort_range`]) and descending
//!   ([`sort_desc`], [`sort_desc_with`]) entry points over any [`RadixKey`] width.
//! - **Reusable Scratch**: A caller-owned [`Workspace`] avoids reallocating radix buffers on
//!   every call.
//! - **Tunable**: [`SortConfig`] exposes the threshold, the insertion-sort cutoff and the
//!   number of digit passes.
//!
//! ## Usage
//!
//! ```rust
//! use pairsort::{sort, sort_desc};
//!
//! let mut keys = vec![5, 3, 3, 1, 4];
//! let mut values = vec![50, 30, 31, 10, 40];
//! sort(&mut keys, &mut values).unwrap();
//! assert_eq!(keys, vec![1, 3, 3, 4, 5]);
//!
//! let mut retained = vec![100i64, 50, 200, 50];
//! let mut objects = vec![1, 2, 3, 4];
//! sort_desc(&mut retained, &mut objects).unwrap();
//! assert_eq!(retained, vec![200, 100, 50, 50]);
//! assert_eq!(&objects[..2], &[3, 1]);
//! ```
//!
//! ## Caveats
//!
//! - Keys must be non-negative. This is only checked in debug builds.
//! - The sort is not stable.
//! - By default only bits 0-31 of each key are examined. 64-bit keys that differ only above
//!   bit 31 need [`DigitPasses::Full`].

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod radix;

pub use algo::{sort, sort_desc, sort_desc_with, sort_range, sort_range_with};
pub use config::{DIGIT_PASSES, DigitPasses, INSERTION_SORT_CUTOFF, RADIX_THRESHOLD, SortConfig};
pub use core::{Direction, RadixKey, Workspace};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{sort, sort_desc, sort_desc_with, sort_range, sort_range_with};
    pub use crate::config::{DigitPasses, SortConfig};
    pub use crate::core::{Direction, RadixKey, Workspace};
    pub use crate::error::SortError;
}
