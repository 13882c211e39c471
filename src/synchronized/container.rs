use super::Synchronized;
use crate::{Container, Result, SortedContainer};

impl<T, C> Container<T> for Synchronized<C>
where
    C: Container<T>,
{
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn unique_len(&self) -> usize {
        self.inner.lock().unique_len()
    }

    fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    fn count_of(&self, value: &T) -> usize {
        self.inner.lock().count_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
    }

    fn add(&mut self, value: T, copies: usize) -> Result<bool> {
        self.inner.lock().add(value, copies)
    }

    fn add_all(&mut self, values: Vec<T>) -> Result<bool> {
        self.inner.lock().add_all(values)
    }

    fn remove(&mut self, value: &T, copies: usize) -> Result<bool> {
        self.inner.lock().remove(value, copies)
    }

    fn remove_all(&mut self, value: &T) -> Result<bool> {
        self.inner.lock().remove_all(value)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T, usize)) {
        self.inner.lock().for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<(T, usize)>> {
        self.inner.lock().flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.lock().clear()
    }
}

impl<T, C> SortedContainer<T> for Synchronized<C>
where
    C: SortedContainer<T>,
{
    fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().first()
    }

    fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().last()
    }
}
