use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap cell flipping the order of its value when the buffer removes
/// the smallest elements first.
#[derive(Clone, Debug)]
pub(super) struct Entry<T> {
    pub(super) value: T,
    pub(super) ascending: bool,
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ascending {
            other.value.cmp(&self.value)
        } else {
            self.value.cmp(&other.value)
        }
    }
}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Ord> Eq for Entry<T> {}

/// Buffer removing its elements in priority order.
///
/// [`PriorityBuffer`] is built on top of a [`std::collections::BinaryHeap`].
/// By default, the smallest element according to [`std::cmp::Ord`] is
/// removed first. A buffer created with
/// [`descending()`](struct.PriorityBuffer.html#method.descending) removes
/// the greatest element first.
/// The relative order of equal elements is not specified.
///
/// * Insertion and removal complexity is `$O(log(n))$`.
/// * Peek complexity is `$O(1)$`.
///
/// ## Examples
///
/// ```
/// use bufbag::{Buffer, PriorityBuffer};
///
/// let mut buffer = PriorityBuffer::new();
/// buffer.insert_all(vec![3, 1, 2]).unwrap();
/// assert_eq!(buffer.remove_first().unwrap(), 1);
///
/// let mut buffer = PriorityBuffer::descending();
/// buffer.insert_all(vec![3, 1, 2]).unwrap();
/// assert_eq!(buffer.remove_first().unwrap(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PriorityBuffer<T: Ord> {
    pub(super) heap: BinaryHeap<Entry<T>>,
    pub(super) ascending: bool,
}

impl<T: Ord> PriorityBuffer<T> {
    /// Create a buffer removing the smallest element first.
    pub fn new() -> Self {
        PriorityBuffer {
            heap: BinaryHeap::new(),
            ascending: true,
        }
    }

    /// Create a buffer removing the greatest element first.
    pub fn descending() -> Self {
        PriorityBuffer {
            heap: BinaryHeap::new(),
            ascending: false,
        }
    }

    /// Whether the smallest element is removed first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub(super) fn entry(&self, value: T) -> Entry<T> {
        Entry {
            value,
            ascending: self.ascending,
        }
    }
}

impl<T: Ord> Default for PriorityBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
