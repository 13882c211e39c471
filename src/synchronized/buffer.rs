use super::Synchronized;
use crate::{Buffer, Result};

impl<T, B> Buffer<T> for Synchronized<B>
where
    B: Buffer<T>,
{
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        self.inner.lock().insert(value)
    }

    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        self.inner.lock().insert_all(values)
    }

    fn remove_first(&mut self) -> Result<T> {
        self.inner.lock().remove_first()
    }

    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().peek_first()
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        self.inner.lock().for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        self.inner.lock().flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.lock().clear()
    }
}
