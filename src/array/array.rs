use crate::{Error, Result};
use std::collections::VecDeque;

/// In-memory first-in first-out buffer.
///
/// [`ArrayBuffer`] is a [`Buffer`](trait.Buffer.html) built on top of a
/// growable ring buffer ([`std::collections::VecDeque`]).
/// Elements are removed in the order they were inserted.
///
/// * Insertion complexity is amortized `$O(1)$`.
/// * Removal and peek complexity is `$O(1)$`.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer};
///
/// let mut buffer = ArrayBuffer::new();
/// buffer.insert_all(vec!["first", "second"]).unwrap();
///
/// assert_eq!(buffer.peek_first().unwrap(), "first");
/// assert_eq!(buffer.remove_first().unwrap(), "first");
/// assert_eq!(buffer.remove_first().unwrap(), "second");
/// assert!(buffer.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayBuffer<T> {
    pub(super) values: VecDeque<T>,
}

impl<T> ArrayBuffer<T> {
    pub fn new() -> Self {
        ArrayBuffer {
            values: VecDeque::new(),
        }
    }

    /// Create an empty buffer with room for `capacity` elements before
    /// it reallocates.
    ///
    /// Panics if the allocation fails. See
    /// [`try_with_capacity()`](struct.ArrayBuffer.html#method.try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayBuffer {
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Create an empty buffer with room for `capacity` elements, failing
    /// with [`Error::InvalidArgument`](enum.Error.html#variant.InvalidArgument)
    /// when they cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut values = VecDeque::new();
        values.try_reserve(capacity).map_err(|e| {
            Error::invalid(format!(
                "cannot allocate {} elements: {}",
                capacity, e
            ))
        })?;
        Ok(ArrayBuffer { values })
    }
}

impl<T> FromIterator<T> for ArrayBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayBuffer {
            values: iter.into_iter().collect(),
        }
    }
}
