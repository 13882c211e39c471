use crate::{Container, Result, SortedContainer};

/// A boxed [`Container`](../trait.Container.html) trait object.
///
/// Since a boxed container is itself a container, it can be wrapped in
/// any decorator.
pub type DynContainer<'a, T> = Box<dyn Container<T> + Send + 'a>;

impl<T, C> Container<T> for Box<C>
where
    C: Container<T> + ?Sized,
{
    fn len(&self) -> usize {
        (**self).len()
    }

    fn unique_len(&self) -> usize {
        (**self).unique_len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn count_of(&self, value: &T) -> usize {
        (**self).count_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        (**self).contains(value)
    }

    fn add(&mut self, value: T, copies: usize) -> Result<bool> {
        (**self).add(value, copies)
    }

    fn add_all(&mut self, values: Vec<T>) -> Result<bool> {
        (**self).add_all(values)
    }

    fn remove(&mut self, value: &T, copies: usize) -> Result<bool> {
        (**self).remove(value, copies)
    }

    fn remove_all(&mut self, value: &T) -> Result<bool> {
        (**self).remove_all(value)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T, usize)) {
        (**self).for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<(T, usize)>> {
        (**self).flush()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

impl<T, C> SortedContainer<T> for Box<C>
where
    C: SortedContainer<T> + ?Sized,
{
    fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        (**self).first()
    }

    fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        (**self).last()
    }
}
