use super::unmodifiable::refuse;
use super::Unmodifiable;
use crate::{Buffer, Result};

impl<T, B> Buffer<T> for Unmodifiable<B>
where
    B: Buffer<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, _value: T) -> Result<()> {
        refuse("insert")
    }

    fn insert_all(&mut self, _values: Vec<T>) -> Result<()> {
        refuse("insert_all")
    }

    fn remove_first(&mut self) -> Result<T> {
        refuse("remove_first")
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
        refuse("flush")
    }

    fn clear(&mut self) -> Result<()> {
        refuse("clear")
    }
}
