//! Strategy tuning for the hybrid sorter.

use crate::core::{DIGIT_BITS, Direction, RadixKey};

/// Ranges of at most this many elements are handed to the radix sorter; larger ones are
/// partitioned first.
pub const RADIX_THRESHOLD: usize = 5_000_000;

/// Number of 8-bit digit passes in the default radix mode (bits 0-31).
pub const DIGIT_PASSES: usize = 4;

/// Ranges of at most this many elements are insertion sorted when the strategy enables it.
pub const INSERTION_SORT_CUTOFF: usize = 12;

/// Which bits of the key the radix sorter examines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitPasses {
    /// [`DIGIT_PASSES`] passes over bits 0-31.
    ///
    /// 64-bit keys that differ only above bit 31 are *not* ordered in this mode. That is
    /// fine for byte sizes and object ids, which stay below `2^31`.
    #[default]
    Low32,
    /// One pass per byte of the key, so 8 passes for 64-bit keys.
    Full,
}

impl DigitPasses {
    /// Number of passes this mode performs for keys of type `K`.
    pub fn count<K: RadixKey>(self) -> usize {
        let full = (K::BITS / DIGIT_BITS) as usize;
        match self {
            DigitPasses::Low32 => DIGIT_PASSES.min(full),
            DigitPasses::Full => full,
        }
    }
}

/// Tunables for one sort call.
///
/// Use [`SortConfig::for_keys`] to get the strategy the plain entry points use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub direction: Direction,
    /// Largest range the radix sorter handles without partitioning.
    pub radix_threshold: usize,
    /// Largest range insertion sorted instead of radix sorted, if any.
    pub insertion_cutoff: Option<usize>,
    pub digit_passes: DigitPasses,
}

impl SortConfig {
    /// Selects the strategy for keys of type `K` sorted in `direction`.
    ///
    /// Descending 64-bit keys insertion sort tiny ranges; every other combination radix
    /// sorts anything below the threshold, however small.
    ///
    /// ```
    /// use pairsort::{Direction, SortConfig, INSERTION_SORT_CUTOFF};
    ///
    /// assert_eq!(SortConfig::for_keys::<i32>(Direction::Ascending).insertion_cutoff, None);
    /// assert_eq!(
    ///     SortConfig::for_keys::<i64>(Direction::Descending).insertion_cutoff,
    ///     Some(INSERTION_SORT_CUTOFF),
    /// );
    /// ```
    pub fn for_keys<K: RadixKey>(direction: Direction) -> Self {
        let insertion_cutoff = match (direction, K::BITS) {
            (Direction::Descending, 64) => Some(INSERTION_SORT_CUTOFF),
            _ => None,
        };
        Self {
            direction,
            radix_threshold: RADIX_THRESHOLD,
            insertion_cutoff,
            digit_passes: DigitPasses::Low32,
        }
    }

    pub fn with_radix_threshold(mut self, threshold: usize) -> Self {
        self.radix_threshold = threshold;
        self
    }

    pub fn with_insertion_cutoff(mut self, cutoff: Option<usize>) -> Self {
        self.insertion_cutoff = cutoff;
        self
    }

    pub fn with_digit_passes(mut self, passes: DigitPasses) -> Self {
        self.digit_passes = passes;
        self
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::for_keys::<i32>(Direction::Ascending)
    }
}
