//! Composable buffer and bag decorators.
//!
//! This crate defines two collection capabilities, the FIFO-like
//! [`Buffer`] and the multiset-like [`Container`] (a bag), and a set of
//! decorators adding one orthogonal behavior each on top of any
//! implementation of these capabilities:
//!
//! * [`Synchronized`]: mutual exclusion over every operation,
//! * [`Blocking`]: removal from an empty buffer waits for an element,
//! * [`Unmodifiable`]: every mutation is refused,
//! * [`Predicated`] and [`Typed`]: insertion of invalid elements is refused,
//! * [`Transformed`]: elements are rewritten before they are stored.
//!
//! A decorator takes ownership of the store it wraps and implements the
//! same capability, so decorators nest freely. The [`compose`] module
//! gathers the constructors of every decorator.
//!
//! ## Examples
//!
//! ```
//! use bufbag::{ArrayBuffer, Buffer, Error};
//! use bufbag::compose::buffers;
//!
//! let positive = buffers::predicated(ArrayBuffer::new(), |x: &i32| *x > 0).unwrap();
//! let mut buffer = buffers::transformed(positive, bufbag::transformer::map(|x: i32| x * 10));
//!
//! buffer.insert(1).unwrap();
//! assert!(matches!(buffer.insert(-1), Err(Error::InvalidArgument(_))));
//! assert_eq!(buffer.remove_first().unwrap(), 10);
//! assert_eq!(buffer.remove_first(), Err(Error::Underflow));
//! ```

/// FIFO-like collection.
///
/// Elements are removed from the buffer in an order defined by the
/// implementation, e.g insertion order for an
/// [`ArrayBuffer`](struct.ArrayBuffer.html) or priority order for a
/// [`PriorityBuffer`](struct.PriorityBuffer.html).
pub trait Buffer<T> {
    /// Get the number of elements in the buffer.
    fn len(&self) -> usize;

    /// Check whether the buffer holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a value in the buffer.
    fn insert(&mut self, value: T) -> Result<()>;

    /// Insert several values in the buffer.
    ///
    /// Implementations validating their input check every value before
    /// inserting any of them.
    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Take the next element out of the buffer.
    /// Returns [`Error::Underflow`] if the buffer is empty.
    fn remove_first(&mut self) -> Result<T>;

    /// Get a copy of the next element [`remove_first()`] would return.
    /// Returns [`Error::Underflow`] if the buffer is empty.
    ///
    /// [`remove_first()`]: trait.Buffer.html#tymethod.remove_first
    fn peek_first(&self) -> Result<T>
    where
        T: Clone;

    /// Visit every element of the buffer without removing it.
    fn for_each(&self, f: &mut dyn FnMut(&T));

    /// Empty the buffer and retrieve its elements in removal order.
    fn flush(&mut self) -> Result<Vec<T>>;

    /// Empty the buffer.
    fn clear(&mut self) -> Result<()> {
        self.flush().map(|_| ())
    }
}

/// Multiset (bag) of elements.
///
/// A container counts the copies of each distinct element it holds.
pub trait Container<T> {
    /// Get the total number of elements, counting copies.
    fn len(&self) -> usize;

    /// Get the number of distinct elements.
    fn unique_len(&self) -> usize;

    /// Check whether the container holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of copies of `value` in the container.
    fn count_of(&self, value: &T) -> usize;

    /// Check whether at least one copy of `value` is in the container.
    fn contains(&self, value: &T) -> bool {
        self.count_of(value) > 0
    }

    /// Add `copies` copies of `value`.
    /// Returns `true` if `value` was not in the container before.
    /// Adding zero copies does nothing and returns `false`.
    fn add(&mut self, value: T, copies: usize) -> Result<bool>;

    /// Add one copy of each of `values`.
    /// Returns `true` if at least one value was not in the container before.
    ///
    /// Implementations validating their input check every value before
    /// adding any of them.
    fn add_all(&mut self, values: Vec<T>) -> Result<bool> {
        let mut changed = false;
        for value in values {
            changed |= self.add(value, 1)?;
        }
        Ok(changed)
    }

    /// Remove up to `copies` copies of `value`.
    /// Returns `true` if at least one copy was removed.
    fn remove(&mut self, value: &T, copies: usize) -> Result<bool>;

    /// Remove every copy of `value`.
    /// Returns `true` if at least one copy was removed.
    fn remove_all(&mut self, value: &T) -> Result<bool> {
        let copies = self.count_of(value);
        self.remove(value, copies)
    }

    /// Visit every distinct element with its number of copies.
    fn for_each(&self, f: &mut dyn FnMut(&T, usize));

    /// Get a copy of every distinct element.
    fn unique(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.unique_len());
        self.for_each(&mut |value, _| out.push(value.clone()));
        out
    }

    /// Empty the container and retrieve its distinct elements with
    /// their number of copies.
    fn flush(&mut self) -> Result<Vec<(T, usize)>>;

    /// Empty the container.
    fn clear(&mut self) -> Result<()> {
        self.flush().map(|_| ())
    }
}

/// [`Container`] keeping its elements sorted.
///
/// [`for_each()`](trait.Container.html#tymethod.for_each) visits elements
/// in ascending order.
pub trait SortedContainer<T>: Container<T> {
    /// Get a copy of the smallest element.
    /// Returns [`Error::Underflow`] if the container is empty.
    fn first(&self) -> Result<T>
    where
        T: Clone;

    /// Get a copy of the greatest element.
    /// Returns [`Error::Underflow`] if the container is empty.
    fn last(&self) -> Result<T>
    where
        T: Clone;
}

/// Thread safe collections.
///
/// Mark a [`Buffer`] or [`Container`] as thread safe.
/// When this trait is implemented, the implementer guarantees that the
/// collection can be used safely concurrently in between its clones
/// obtained with the method
/// [`Concurrent::clone()`](trait.Concurrent.html#tymethod.clone).
/// Clones are shallow copies referring to the same backing store.
pub trait Concurrent: Send + Sync {
    /// Create a shallow copy of the collection pointing to the same
    /// backing store that can be later used concurrently.
    fn clone(&self) -> Self;
}

mod error;
pub use error::{Error, Result};

mod array;
pub use array::ArrayBuffer;
mod priority;
pub use priority::PriorityBuffer;
mod hash_bag;
pub use hash_bag::HashBag;
mod tree_bag;
pub use tree_bag::TreeBag;

mod synchronized;
pub use synchronized::Synchronized;
mod blocking;
pub use blocking::{Blocking, Wake};
mod unmodifiable;
pub use unmodifiable::Unmodifiable;
mod predicated;
pub use predicated::{Predicate, Predicated};
mod typed;
pub use typed::{KindSet, Kinded, Typed};
mod transformed;
pub use transformed::Transformed;

/// Collaborators rewriting values of a
/// [`Transformed`](struct.Transformed.html) decorator.
pub mod transformer {
    pub use crate::transformed::transformer::{map, Map, Transformer};
}

mod objsafe;
pub use objsafe::{DynBuffer, DynContainer};

/// Constructors of every decorator.
///
/// Each function wraps a backing store into one decorator and returns the
/// decorator, which implements the same capability as its input and can
/// be wrapped again. Constructors that validate their arguments return a
/// [`Result`](type.Result.html) and never return a partially built
/// decorator.
pub mod compose;

#[cfg(feature = "config")]
/// Building decorator chains from a configuration.
pub mod config;

#[cfg(test)]
/// Reusable property checks of buffers and containers.
pub mod tests;
