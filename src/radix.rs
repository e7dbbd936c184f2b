//! LSD radix sort over paired key/value slices.
//!
//! Each pass is a stable counting sort on one 8-bit digit, starting from the least
//! significant. Passes ping-pong between the live slices and the scratch slices, so an even
//! number of passes leaves the result back in place.

use crate::config::DigitPasses;
use crate::core::{Direction, RADIX_BUCKETS, RadixKey};
use cuneiform::cuneiform;

// Cache-aligned bucket offsets.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Radix sorts `keys` in `direction`, applying the same permutation to `values`.
///
/// `scratch_keys` and `scratch_values` must be exactly as long as `keys`; their contents
/// going in are ignored and coming out are unspecified.
///
/// With [`DigitPasses::Low32`] only bits 0-31 are examined, so wider keys are ordered by
/// their low 32 bits alone.
///
/// # Panics
///
/// Panics if the four slices differ in length.
///
/// # Examples
///
/// ```
/// use pairsort::radix::radix_sort;
/// use pairsort::{DigitPasses, Direction};
///
/// let mut keys = vec![3u32, 1, 2];
/// let mut values = vec!['c', 'a', 'b'];
/// let mut scratch_keys = vec![0u32; 3];
/// let mut scratch_values = vec![' '; 3];
///
/// radix_sort(
///     &mut keys,
///     &mut values,
///     &mut scratch_keys,
///     &mut scratch_values,
///     Direction::Ascending,
///     DigitPasses::Low32,
/// );
/// assert_eq!(keys, vec![1, 2, 3]);
/// assert_eq!(values, vec!['a', 'b', 'c']);
/// ```
pub fn radix_sort<K: RadixKey, V: Copy>(
    keys: &mut [K],
    values: &mut [V],
    scratch_keys: &mut [K],
    scratch_values: &mut [V],
    direction: Direction,
    passes: DigitPasses,
) {
    let len = keys.len();
    assert_eq!(values.len(), len, "values must pair with keys");
    assert_eq!(scratch_keys.len(), len, "scratch keys must match range");
    assert_eq!(scratch_values.len(), len, "scratch values must match range");

    let passes = passes.count::<K>();
    for pass in 0..passes {
        if pass % 2 == 0 {
            counting_sort(keys, values, scratch_keys, scratch_values, pass, direction);
        } else {
            counting_sort(scratch_keys, scratch_values, keys, values, pass, direction);
        }
    }

    // Only reachable for key widths with an odd byte count.
    if passes % 2 == 1 {
        keys.copy_from_slice(scratch_keys);
        values.copy_from_slice(scratch_values);
    }
}

/// Radix sorts using freshly allocated scratch buffers.
pub(crate) fn radix_sort_alloc<K: RadixKey, V: Copy>(
    keys: &mut [K],
    values: &mut [V],
    direction: Direction,
    passes: DigitPasses,
) {
    let mut scratch_keys = keys.to_vec();
    let mut scratch_values = values.to_vec();
    radix_sort(
        keys,
        values,
        &mut scratch_keys,
        &mut scratch_values,
        direction,
        passes,
    );
}

/// One stable distribution pass on digit `pass`, from `src` into `dst`.
///
/// 1. Builds the 256-bucket histogram of the digit.
/// 2. Turns it into starting offsets: bucket 0 first when ascending, bucket 255 first when
///    descending.
/// 3. Scans the source in order, placing each pair at its bucket's next free slot.
fn counting_sort<K: RadixKey, V: Copy>(
    src_keys: &[K],
    src_values: &[V],
    dst_keys: &mut [K],
    dst_values: &mut [V],
    pass: usize,
    direction: Direction,
) {
    let mut offsets = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };
    let offsets = &mut offsets.data;

    src_keys.iter().for_each(|k| offsets[k.digit(pass)] += 1);

    let mut sum = 0;
    let mut to_offset = |slot: &mut usize| {
        let count = *slot;
        *slot = sum;
        sum += count;
    };
    match direction {
        Direction::Ascending => offsets.iter_mut().for_each(&mut to_offset),
        Direction::Descending => offsets.iter_mut().rev().for_each(&mut to_offset),
    }

    src_keys
        .iter()
        .zip(src_values.iter())
        .for_each(|(&key, &value)| {
            let bucket = key.digit(pass);
            let pos = offsets[bucket];
            dst_keys[pos] = key;
            dst_values[pos] = value;
            offsets[bucket] = pos + 1;
        });
}
