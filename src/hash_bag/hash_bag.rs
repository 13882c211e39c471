use std::collections::HashMap;
use std::hash::Hash;

/// Hash-backed multiset.
///
/// [`HashBag`] counts copies of its elements in a
/// [`std::collections::HashMap`].
/// Elements are visited in an unspecified order.
///
/// * Insertion, removal and count lookup complexity is `$O(1)$` on average.
///
/// ## Examples
///
/// ```
/// use bufbag::{Container, HashBag};
///
/// let mut bag = HashBag::new();
/// assert!(bag.add("apple", 2).unwrap());
/// assert!(!bag.add("apple", 1).unwrap());
/// assert_eq!(bag.count_of(&"apple"), 3);
///
/// bag.remove(&"apple", 2).unwrap();
/// assert_eq!(bag.count_of(&"apple"), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HashBag<T: Hash + Eq> {
    pub(super) counts: HashMap<T, usize>,
    pub(super) total: usize,
}

impl<T: Hash + Eq> HashBag<T> {
    pub fn new() -> Self {
        HashBag {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq> Default for HashBag<T> {
    fn default() -> Self {
        Self::new()
    }
}
