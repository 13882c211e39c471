use super::unmodifiable::refuse;
use super::Unmodifiable;
use crate::{Container, Result, SortedContainer};

impl<T, C> Container<T> for Unmodifiable<C>
where
    C: Container<T>,
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

    fn add(&mut self, _value: T, _copies: usize) -> Result<bool> {
        refuse("add")
    }

    fn add_all(&mut self, _values: Vec<T>) -> Result<bool> {
        refuse("add_all")
    }

    fn remove(&mut self, _value: &T, _copies: usize) -> Result<bool> {
        refuse("remove")
    }

    fn remove_all(&mut self, _value: &T) -> Result<bool> {
        refuse("remove_all")
    }

    fn for_each(&self, f: &mut dyn FnMut(&T, usize)) {
        self.inner.for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<(T, usize)>> {
        refuse("flush")
    }

    fn clear(&mut self) -> Result<()> {
        refuse("clear")
    }
}

impl<T, C> SortedContainer<T> for Unmodifiable<C>
where
    C: SortedContainer<T>,
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
