use super::Blocking;
use crate::{Buffer, Result};

impl<T, B> Buffer<T> for Blocking<B>
where
    B: Buffer<T>,
{
    fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    /// Insert `value` in the wrapped buffer and wake up waiters.
    ///
    /// Errors of the wrapped buffer are forwarded and no waiter is woken
    /// up in this case.
    fn insert(&mut self, value: T) -> Result<()> {
        let mut state = self.lock();
        state.buffer.insert(value)?;
        if state.waiting > 0 {
            self.signal();
        }
        Ok(())
    }

    /// Insert `values` in the wrapped buffer and wake up every waiter.
    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        let mut state = self.lock();
        state.buffer.insert_all(values)?;
        if state.waiting > 0 {
            self.monitor.available.notify_all();
        }
        Ok(())
    }

    /// Remove the first element, waiting for one if the buffer is empty.
    ///
    /// The wait is unbounded unless a default timeout was set with
    /// [`with_timeout()`](struct.Blocking.html#method.with_timeout).
    fn remove_first(&mut self) -> Result<T> {
        self.wait_for::<T, _, _>(self.timeout, |b| b.remove_first())
    }

    /// Peek at the first element, waiting for one if the buffer is empty.
    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.wait_for::<T, _, _>(self.timeout, |b| b.peek_first())
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        self.lock().buffer.for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        self.lock().buffer.flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.lock().buffer.clear()
    }
}
