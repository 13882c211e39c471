use super::ArrayBuffer;
use crate::{Buffer, Error, Result};

impl<T> Buffer<T> for ArrayBuffer<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        self.values.push_back(value);
        Ok(())
    }

    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        self.values.extend(values);
        Ok(())
    }

    fn remove_first(&mut self) -> Result<T> {
        self.values.pop_front().ok_or(Error::Underflow)
    }

    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.values.front().cloned().ok_or(Error::Underflow)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        self.values.iter().for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        Ok(self.values.drain(..).collect())
    }
}
