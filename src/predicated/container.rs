use super::{Predicate, Predicated};
use crate::{Container, Result, SortedContainer};

impl<C, P> Predicated<C, P> {
    /// Wrap `container` into a validating container.
    ///
    /// Fails with
    /// [`Error::InvalidArgument`](enum.Error.html#variant.InvalidArgument)
    /// if an element of `container` is rejected by `predicate`.
    pub fn container<T>(container: C, predicate: P) -> Result<Self>
    where
        C: Container<T>,
        P: Predicate<T>,
    {
        let mut rejected = 0;
        container.for_each(&mut |v, _| {
            if !predicate.evaluate(v) {
                rejected += 1
            }
        });
        Self::checked::<T>(container, predicate, rejected)
    }
}

impl<T, C, P> Container<T> for Predicated<C, P>
where
    C: Container<T>,
    P: Predicate<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn unique_len(&self) -> usize {
        self.inner.unique_len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn count_of(&self, value: &T) -> usize {
        self.inner.count_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    fn add(&mut self, value: T, copies: usize) -> Result<bool> {
        self.validate(&value)?;
        self.inner.add(value, copies)
    }

    fn add_all(&mut self, values: Vec<T>) -> Result<bool> {
        for value in values.iter() {
            self.validate(value)?;
        }
        self.inner.add_all(values)
    }

    fn remove(&mut self, value: &T, copies: usize) -> Result<bool> {
        self.inner.remove(value, copies)
    }

    fn remove_all(&mut self, value: &T) -> Result<bool> {
        self.inner.remove_all(value)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T, usize)) {
        self.inner.for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<(T, usize)>> {
        self.inner.flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.clear()
    }
}

impl<T, C, P> SortedContainer<T> for Predicated<C, P>
where
    C: SortedContainer<T>,
    P: Predicate<T>,
{
    fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.first()
    }

    fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.last()
    }
}
