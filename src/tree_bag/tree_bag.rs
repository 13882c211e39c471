use std::collections::BTreeMap;

/// Ordered multiset.
///
/// [`TreeBag`] counts copies of its elements in a
/// [`std::collections::BTreeMap`] and implements
/// [`SortedContainer`](trait.SortedContainer.html): elements are visited in
/// ascending order.
///
/// * Insertion, removal and count lookup complexity is `$O(log(n))$`.
///
/// ## Examples
///
/// ```
/// use bufbag::{Container, SortedContainer, TreeBag};
///
/// let mut bag = TreeBag::new();
/// bag.add_all(vec![3, 1, 2, 1]).unwrap();
///
/// assert_eq!(bag.first().unwrap(), 1);
/// assert_eq!(bag.last().unwrap(), 3);
/// assert_eq!(bag.count_of(&1), 2);
/// assert_eq!(bag.unique(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct TreeBag<T: Ord> {
    pub(super) counts: BTreeMap<T, usize>,
    pub(super) total: usize,
}

impl<T: Ord> TreeBag<T> {
    pub fn new() -> Self {
        TreeBag {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<T: Ord> Default for TreeBag<T> {
    fn default() -> Self {
        Self::new()
    }
}
