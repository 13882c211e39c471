use super::transformer::Transformer;
use super::Transformed;
use crate::{Buffer, Result};

impl<B, F> Transformed<B, F> {
    /// Wrap `buffer` and transform the elements it already holds.
    ///
    /// Elements are taken out of `buffer` in removal order, transformed and
    /// inserted back. Fails if one of the transforms fails.
    pub fn decorate_buffer<T>(mut buffer: B, transformer: F) -> Result<Self>
    where
        B: Buffer<T>,
        F: Transformer<T>,
    {
        let values = buffer
            .flush()?
            .into_iter()
            .map(|v| transformer.transform(v))
            .collect::<Result<Vec<T>>>()?;
        buffer.insert_all(values)?;
        Ok(Self::new(buffer, transformer))
    }
}

impl<T, B, F> Buffer<T> for Transformed<B, F>
where
    B: Buffer<T>,
    F: Transformer<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        let value = self.transformer.transform(value)?;
        self.inner.insert(value)
    }

    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        let values = values
            .into_iter()
            .map(|v| self.transformer.transform(v))
            .collect::<Result<Vec<T>>>()?;
        self.inner.insert_all(values)
    }

    fn remove_first(&mut self) -> Result<T> {
        self.inner.remove_first()
    }

    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.peek_first()
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        self.inner.for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        self.inner.flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.clear()
    }
}
