//! Core traits and types for pairsort.
//!
//! This module defines:
//! - [`RadixKey`]: The key-width abstraction the radix sorter digs digits out of.
//! - [`Direction`]: Ascending or descending order.
//! - [`Workspace`]: Caller-owned scratch buffers reused across calls.

use std::fmt;

/// Width of a single radix digit in bits.
pub const DIGIT_BITS: u32 = 8;

/// Number of distinct digit values (buckets) per pass.
pub const RADIX_BUCKETS: usize = 1 << DIGIT_BITS;

/// A fixed-width integer key that can be sorted digit by digit.
///
/// Keys must be non-negative. Signed implementations report negative values through
/// [`RadixKey::is_negative`] so entry points can catch them in debug builds; the radix
/// path places them as if they were large unsigned values, which is not a supported order.
///
/// # Examples
///
/// ```
/// use pairsort::core::RadixKey;
///
/// assert_eq!(0x1234_5678i32.digit(0), 0x78);
/// assert_eq!(0x1234_5678i32.digit(3), 0x12);
/// assert_eq!(<i64 as RadixKey>::BITS, 64);
/// ```
pub trait RadixKey: Copy + Ord + Default + fmt::Debug {
    /// Width of the key in bits.
    const BITS: u32;

    /// Returns the 8-bit digit at `pass`, where pass 0 is bits 0-7.
    ///
    /// `pass` must be less than `Self::BITS / 8`.
    fn digit(self, pass: usize) -> usize;

    /// Returns `true` for keys outside the supported non-negative domain.
    #[inline(always)]
    fn is_negative(self) -> bool {
        false
    }
}

macro_rules! impl_unsigned_key {
    ($($t:ty),*) => {$(
        impl RadixKey for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn digit(self, pass: usize) -> usize {
                ((self >> (pass as u32 * DIGIT_BITS)) & 0xff) as usize
            }
        }
    )*};
}

macro_rules! impl_signed_key {
    ($($t:ty => $u:ty),*) => {$(
        impl RadixKey for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn digit(self, pass: usize) -> usize {
                (((self as $u) >> (pass as u32 * DIGIT_BITS)) & 0xff) as usize
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

impl_unsigned_key!(u32, u64);
impl_signed_key!(i32 => u32, i64 => u64);

/// Sort order of the keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Non-decreasing keys.
    #[default]
    Ascending,
    /// Non-increasing keys.
    Descending,
}

impl Direction {
    /// Returns `true` if `a` belongs strictly before `b` in this order.
    #[inline(always)]
    pub fn precedes<K: Ord>(self, a: K, b: K) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

/// Swaps positions `a` and `b` in both arrays.
///
/// Every reordering of a key goes through here (or through the radix placement), so the
/// value at a position always stays paired with its key.
#[inline(always)]
pub(crate) fn swap_pairs<K, V>(keys: &mut [K], values: &mut [V], a: usize, b: usize) {
    keys.swap(a, b);
    values.swap(a, b);
}

/// Scratch buffers for the radix sorter, owned by the caller.
///
/// A workspace is borrowed mutably for the duration of one call and never retained, so
/// two threads can only share one by handing it over. Its contents after a call are
/// unspecified: it is working storage, not output.
///
/// # Examples
///
/// ```
/// use pairsort::{Workspace, sort_desc_with};
///
/// let mut workspace = Workspace::<i64, i32>::new(4);
///
/// let mut keys = vec![100i64, 50, 200, 50];
/// let mut values = vec![1, 2, 3, 4];
/// sort_desc_with(&mut keys, &mut values, &mut workspace).unwrap();
/// assert_eq!(keys, vec![200, 100, 50, 50]);
///
/// // The same workspace serves the next call without reallocating.
/// let mut keys = vec![3i64, 9, 1];
/// let mut values = vec![30, 90, 10];
/// sort_desc_with(&mut keys, &mut values, &mut workspace).unwrap();
/// assert_eq!(values, vec![90, 30, 10]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Workspace<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: RadixKey, V: Copy + Default> Workspace<K, V> {
    /// Allocates a workspace able to radix sort ranges of up to `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            keys: vec![K::default(); len],
            values: vec![V::default(); len],
        }
    }

    /// Grows the workspace so it can serve ranges of up to `len` elements.
    ///
    /// Never shrinks.
    pub fn reserve_for(&mut self, len: usize) {
        if self.keys.len() < len {
            self.keys.resize(len, K::default());
        }
        if self.values.len() < len {
            self.values.resize(len, V::default());
        }
    }
}

impl<K, V> Workspace<K, V> {
    /// Largest range length this workspace can radix sort.
    pub fn capacity(&self) -> usize {
        self.keys.len().min(self.values.len())
    }

    /// Borrows the first `len` slots of both buffers.
    pub(crate) fn buffers(&mut self, len: usize) -> (&mut [K], &mut [V]) {
        (&mut self.keys[..len], &mut self.values[..len])
    }
}
