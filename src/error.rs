//! Error type returned by the sorting entry points.

use thiserror::Error;

/// Precondition violations detected before any element is moved.
///
/// A call that returns an error has not touched the key, value, or scratch arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The key and value slices are not the same length.
    #[error("keys and values differ in length ({keys} keys, {values} values)")]
    LengthMismatch { keys: usize, values: usize },

    /// The `offset..offset + length` window does not fit inside the slices.
    #[error("range of {length} elements at offset {offset} is out of bounds for length {len}")]
    RangeOutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },

    /// The caller-supplied workspace cannot hold the range being radix sorted.
    #[error("workspace holds {capacity} elements but {required} are required")]
    ScratchTooSmall { required: usize, capacity: usize },
}
