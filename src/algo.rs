//! Hybrid quicksort/radix sort over paired key and value slices.
//!
//! The driver partitions any range larger than the radix threshold around a
//! median-of-three pivot and hands everything at or below the threshold to the LSD radix
//! sorter, so radix sort's O(n) scratch requirement stays capped:
//! - **Partitioner**: Lomuto-style single pass, swapping key/value pairs in lock-step.
//! - **Radix sort**: Four stable 8-bit counting passes (see [`crate::radix`]).
//! - **Insertion sort**: Optional fallback for tiny ranges.
//!
//! The main entry points are [`sort`], [`sort_desc`] and [`sort_range_with`].

use crate::config::{DigitPasses, SortConfig};
use crate::core::{Direction, RadixKey, Workspace, swap_pairs};
use crate::error::SortError;
use crate::radix::{radix_sort, radix_sort_alloc};
use log::{debug, trace};
use std::mem;
use std::ops::Range;

/// Sorts `keys` in increasing order, moving `values[i]` together with `keys[i]`.
///
/// Keys must be non-negative. The sort is not stable.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the slices differ in length.
///
/// # Examples
///
/// ```
/// use pairsort::sort;
///
/// let mut keys = vec![5, 3, 1, 4];
/// let mut values = vec![50, 30, 10, 40];
/// sort(&mut keys, &mut values).unwrap();
///
/// assert_eq!(keys, vec![1, 3, 4, 5]);
/// assert_eq!(values, vec![10, 30, 40, 50]);
/// ```
pub fn sort<K: RadixKey, V: Copy>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    let len = keys.len();
    sort_range(keys, values, 0, len)
}

/// Sorts `keys[offset..offset + length]` in increasing order, leaving everything outside
/// the window untouched.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the slices differ in length and
/// [`SortError::RangeOutOfBounds`] if the window does not fit.
///
/// # Examples
///
/// ```
/// use pairsort::sort_range;
///
/// let mut keys = vec![9, 3, 2, 1, 0];
/// let mut values = vec![9, 3, 2, 1, 0];
/// sort_range(&mut keys, &mut values, 1, 3).unwrap();
///
/// assert_eq!(keys, vec![9, 1, 2, 3, 0]);
/// ```
pub fn sort_range<K: RadixKey, V: Copy>(
    keys: &mut [K],
    values: &mut [V],
    offset: usize,
    length: usize,
) -> Result<(), SortError> {
    let config = SortConfig::for_keys::<K>(Direction::Ascending);
    sort_range_with(keys, values, offset, length, &config, None)
}

/// Sorts `keys` in decreasing order, moving `values[i]` together with `keys[i]`.
///
/// Scratch buffers for the radix passes are allocated per call; use [`sort_desc_with`] to
/// reuse them across calls.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the slices differ in length.
///
/// # Examples
///
/// ```
/// use pairsort::sort_desc;
///
/// let mut sizes = vec![100i64, 50, 200];
/// let mut ids = vec![1, 2, 3];
/// sort_desc(&mut sizes, &mut ids).unwrap();
///
/// assert_eq!(sizes, vec![200, 100, 50]);
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn sort_desc<K: RadixKey, V: Copy>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    let len = keys.len();
    let config = SortConfig::for_keys::<K>(Direction::Descending);
    sort_range_with(keys, values, 0, len, &config, None)
}

/// Sorts `keys` in decreasing order, using `workspace` as the radix scratch space.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the slices differ in length and
/// [`SortError::ScratchTooSmall`] if the workspace cannot hold the largest range that may
/// be radix sorted.
pub fn sort_desc_with<K: RadixKey, V: Copy>(
    keys: &mut [K],
    values: &mut [V],
    workspace: &mut Workspace<K, V>,
) -> Result<(), SortError> {
    let len = keys.len();
    let config = SortConfig::for_keys::<K>(Direction::Descending);
    sort_range_with(keys, values, 0, len, &config, Some(workspace))
}

/// Sorts `keys[offset..offset + length]` with an explicit strategy and optional scratch.
///
/// All other entry points funnel through here. Preconditions are checked before any
/// element moves, so an `Err` leaves every slice untouched.
///
/// # Errors
///
/// - [`SortError::LengthMismatch`] if the slices differ in length.
/// - [`SortError::RangeOutOfBounds`] if the window does not fit (or overflows `usize`).
/// - [`SortError::ScratchTooSmall`] if `workspace` is shorter than the largest range the
///   radix sorter could be handed, i.e. `min(length, config.radix_threshold)`.
///
/// # Examples
///
/// ```
/// use pairsort::{DigitPasses, Direction, SortConfig, sort_range_with};
///
/// // Keys that differ only above bit 31 need the full 8-pass mode.
/// let config = SortConfig::for_keys::<u64>(Direction::Ascending)
///     .with_digit_passes(DigitPasses::Full);
///
/// let mut keys = vec![3u64 << 32, 1 << 32, 2 << 32];
/// let mut values = vec![3, 1, 2];
/// sort_range_with(&mut keys, &mut values, 0, 3, &config, None).unwrap();
///
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn sort_range_with<K: RadixKey, V: Copy>(
    keys: &mut [K],
    values: &mut [V],
    offset: usize,
    length: usize,
    config: &SortConfig,
    workspace: Option<&mut Workspace<K, V>>,
) -> Result<(), SortError> {
    let range = checked_range(keys.len(), values.len(), offset, length)?;

    let mut scratch = match workspace {
        Some(workspace) => {
            let required = scratch_required(length, config);
            if workspace.capacity() < required {
                return Err(SortError::ScratchTooSmall {
                    required,
                    capacity: workspace.capacity(),
                });
            }
            Scratch::Borrowed(workspace)
        }
        None => Scratch::Allocate,
    };

    let keys = &mut keys[range.clone()];
    let values = &mut values[range];
    debug_assert!(
        keys.iter().all(|k| !k.is_negative()),
        "negative keys are not supported"
    );

    debug!(
        "sorting {} pairs {} (radix threshold {}, insertion cutoff {:?}, {:?} digit passes)",
        length, config.direction, config.radix_threshold, config.insertion_cutoff, config.digit_passes
    );
    hybrid_sort(keys, values, config, &mut scratch);
    Ok(())
}

fn checked_range(
    keys_len: usize,
    values_len: usize,
    offset: usize,
    length: usize,
) -> Result<Range<usize>, SortError> {
    if keys_len != values_len {
        return Err(SortError::LengthMismatch {
            keys: keys_len,
            values: values_len,
        });
    }
    match offset.checked_add(length) {
        Some(end) if end <= keys_len => Ok(offset..end),
        _ => Err(SortError::RangeOutOfBounds {
            offset,
            length,
            len: keys_len,
        }),
    }
}

/// Largest range the driver can hand to the radix sorter for a sort of `length` pairs.
fn scratch_required(length: usize, config: &SortConfig) -> usize {
    if length <= 1 || config.insertion_cutoff.is_some_and(|cutoff| length <= cutoff) {
        return 0;
    }
    length.min(config.radix_threshold)
}

/// Where the radix sorter gets its scratch buffers from.
enum Scratch<'a, K, V> {
    Borrowed(&'a mut Workspace<K, V>),
    Allocate,
}

impl<K: RadixKey, V: Copy> Scratch<'_, K, V> {
    fn radix_sort(
        &mut self,
        keys: &mut [K],
        values: &mut [V],
        direction: Direction,
        passes: DigitPasses,
    ) {
        match self {
            Scratch::Borrowed(workspace) => {
                let (scratch_keys, scratch_values) = workspace.buffers(keys.len());
                radix_sort(keys, values, scratch_keys, scratch_values, direction, passes);
            }
            Scratch::Allocate => radix_sort_alloc(keys, values, direction, passes),
        }
    }
}

/// Sorts the whole of `keys`/`values`.
///
/// Recurses into the shorter side of each partition and loops on the longer one, so stack
/// depth stays logarithmic however unbalanced the pivots are.
fn hybrid_sort<K: RadixKey, V: Copy>(
    mut keys: &mut [K],
    mut values: &mut [V],
    config: &SortConfig,
    scratch: &mut Scratch<'_, K, V>,
) {
    loop {
        let len = keys.len();
        if len <= 1 {
            return;
        }

        if len <= config.radix_threshold {
            if config.insertion_cutoff.is_some_and(|cutoff| len <= cutoff) {
                insertion_sort(keys, values, config.direction);
            } else {
                scratch.radix_sort(keys, values, config.direction, config.digit_passes);
            }
            return;
        }

        let mid = partition(keys, values, config.direction);
        trace!("partitioned {} pairs at {}", len, mid);

        let (left_keys, rest_keys) = mem::take(&mut keys).split_at_mut(mid);
        let (left_values, rest_values) = mem::take(&mut values).split_at_mut(mid);
        // The pivot at `mid` is in its final position.
        let right_keys = &mut rest_keys[1..];
        let right_values = &mut rest_values[1..];

        if left_keys.len() < right_keys.len() {
            hybrid_sort(left_keys, left_values, config, scratch);
            keys = right_keys;
            values = right_values;
        } else {
            hybrid_sort(right_keys, right_values, config, scratch);
            keys = left_keys;
            values = left_values;
        }
    }
}

/// Returns whichever of `pos1`, `pos2`, `pos3` holds the median key.
///
/// Comparisons are always ascending, whatever the sort direction.
#[inline]
fn median_of_three<K: RadixKey>(keys: &[K], pos1: usize, pos2: usize, pos3: usize) -> usize {
    let (v1, v2, v3) = (keys[pos1], keys[pos2], keys[pos3]);

    if v1 < v2 {
        if v2 <= v3 {
            pos2
        } else if v1 < v3 {
            pos3
        } else {
            pos1
        }
    } else if v1 <= v3 {
        pos1
    } else if v2 < v3 {
        pos3
    } else {
        pos2
    }
}

/// Partitions around the median of the first, last and middle keys.
///
/// Returns the pivot's final index `i`: keys before it precede or tie the pivot, keys after
/// it follow or tie it. `keys` must hold at least one element.
fn partition<K: RadixKey, V>(keys: &mut [K], values: &mut [V], direction: Direction) -> usize {
    let right = keys.len() - 1;
    let pivot_idx = median_of_three(keys, 0, right, right >> 1);
    let pivot = keys[pivot_idx];

    swap_pairs(keys, values, 0, pivot_idx);

    let mut i = 0;
    for j in 1..=right {
        if direction.precedes(keys[j], pivot) {
            i += 1;
            swap_pairs(keys, values, i, j);
        }
    }
    swap_pairs(keys, values, 0, i);

    i
}

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case.
fn insertion_sort<K: RadixKey, V>(keys: &mut [K], values: &mut [V], direction: Direction) {
    for i in 1..keys.len() {
        let mut j = i;
        while j > 0 && direction.precedes(keys[j], keys[j - 1]) {
            swap_pairs(keys, values, j, j - 1);
            j -= 1;
        }
    }
}
