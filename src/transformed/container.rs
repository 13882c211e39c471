use super::transformer::Transformer;
use super::Transformed;
use crate::{Container, Result, SortedContainer};

impl<C, F> Transformed<C, F> {
    /// Wrap `container` and transform the elements it already holds.
    ///
    /// Copies of elements transformed into equal values are merged.
    /// Fails if one of the transforms fails.
    pub fn decorate_container<T>(mut container: C, transformer: F) -> Result<Self>
    where
        C: Container<T>,
        F: Transformer<T>,
    {
        let values = container
            .flush()?
            .into_iter()
            .map(|(v, n)| transformer.transform(v).map(|v| (v, n)))
            .collect::<Result<Vec<(T, usize)>>>()?;
        for (v, n) in values {
            container.add(v, n)?;
        }
        Ok(Self::new(container, transformer))
    }
}

impl<T, C, F> Container<T> for Transformed<C, F>
where
    C: Container<T>,
    F: Transformer<T>,
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
        let value = self.transformer.transform(value)?;
        self.inner.add(value, copies)
    }

    fn add_all(&mut self, values: Vec<T>) -> Result<bool> {
        let values = values
            .into_iter()
            .map(|v| self.transformer.transform(v))
            .collect::<Result<Vec<T>>>()?;
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

impl<T, C, F> SortedContainer<T> for Transformed<C, F>
where
    C: SortedContainer<T>,
    F: Transformer<T>,
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
