use super::{Predicate, Predicated};
use crate::{Buffer, Result};

impl<B, P> Predicated<B, P> {
    /// Wrap `buffer` into a validating buffer.
    ///
    /// Fails with
    /// [`Error::InvalidArgument`](enum.Error.html#variant.InvalidArgument)
    /// if an element of `buffer` is rejected by `predicate`.
    pub fn buffer<T>(buffer: B, predicate: P) -> Result<Self>
    where
        B: Buffer<T>,
        P: Predicate<T>,
    {
        let mut rejected = 0;
        buffer.for_each(&mut |v| {
            if !predicate.evaluate(v) {
                rejected += 1
            }
        });
        Self::checked::<T>(buffer, predicate, rejected)
    }
}

impl<T, B, P> Buffer<T> for Predicated<B, P>
where
    B: Buffer<T>,
    P: Predicate<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        self.validate(&value)?;
        self.inner.insert(value)
    }

    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        for value in values.iter() {
            self.validate(value)?;
        }
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

#[cfg(test)]
mod tests {
    use super::Predicated;
    use crate::tests::{test_buffer, TestValue};
    use crate::{ArrayBuffer, Buffer, Error, PriorityBuffer};

    fn even(v: &TestValue) -> bool {
        v % 2 == 0
    }

    #[test]
    fn buffer() {
        test_buffer(Predicated::buffer(ArrayBuffer::new(), |_: &TestValue| true).unwrap());
        test_buffer(Predicated::buffer(PriorityBuffer::new(), |_: &TestValue| true).unwrap());
    }

    #[test]
    fn rejects_existing_elements() {
        let backing: ArrayBuffer<TestValue> = vec![2, 4, 5].into_iter().collect();
        assert!(matches!(
            Predicated::buffer(backing, even),
            Err(Error::InvalidArgument(_))
        ));

        let backing: ArrayBuffer<TestValue> = vec![2, 4, 6].into_iter().collect();
        let buffer = Predicated::buffer(backing, even).unwrap();
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn rejects_insertion() {
        let mut buffer = Predicated::buffer(ArrayBuffer::new(), even).unwrap();
        buffer.insert(2).unwrap();

        let before = buffer.len();
        assert!(matches!(buffer.insert(3), Err(Error::InvalidArgument(_))));
        assert_eq!(buffer.len(), before);

        assert!(matches!(buffer.insert_all(vec![4, 6, 7, 8]), Err(Error::InvalidArgument(_))));
        assert_eq!(buffer.get_ref().len(), before);

        buffer.insert_all(vec![4, 6]).unwrap();
        assert_eq!(buffer.flush().unwrap(), vec![2, 4, 6]);
    }
}
