use super::PriorityBuffer;
use crate::{Buffer, Error, Result};

impl<T: Ord> Buffer<T> for PriorityBuffer<T> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        let entry = self.entry(value);
        self.heap.push(entry);
        Ok(())
    }

    fn remove_first(&mut self) -> Result<T> {
        self.heap.pop().map(|e| e.value).ok_or(Error::Underflow)
    }

    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.heap
            .peek()
            .map(|e| e.value.clone())
            .ok_or(Error::Underflow)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        for e in self.heap.iter() {
            f(&e.value)
        }
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        let heap = std::mem::take(&mut self.heap);
        Ok(heap.into_sorted_vec().into_iter().rev().map(|e| e.value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityBuffer;
    use crate::tests::{rand, test_buffer};
    use crate::Buffer;

    #[test]
    fn buffer() {
        test_buffer(PriorityBuffer::new());
        test_buffer(PriorityBuffer::descending());
    }

    #[test]
    fn removal_order() {
        let values: Vec<u32> = (0..100).map(|_| rand(0, 1000) as u32).collect();

        let mut ascending = PriorityBuffer::new();
        ascending.insert_all(values.clone()).unwrap();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(ascending.peek_first().unwrap(), sorted[0]);
        for v in sorted.iter() {
            assert_eq!(ascending.remove_first().unwrap(), *v);
        }

        let mut descending = PriorityBuffer::descending();
        descending.insert_all(values).unwrap();
        let flushed = descending.flush().unwrap();
        sorted.reverse();
        assert_eq!(flushed, sorted);
    }
}
