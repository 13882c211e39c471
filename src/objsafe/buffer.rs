use crate::{Buffer, Result};

/// A boxed [`Buffer`](../trait.Buffer.html) trait object.
///
/// Buffers whose type is only known at runtime, e.g built from a
/// [configuration](config/index.html), are handled through this type.
/// Since a boxed buffer is itself a buffer, it can be wrapped in any
/// decorator.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Blocking, Buffer, DynBuffer, PriorityBuffer};
///
/// let fifo: DynBuffer<u8> = Box::new(ArrayBuffer::new());
/// let prio: DynBuffer<u8> = Box::new(PriorityBuffer::new());
///
/// for buffer in vec![fifo, prio] {
///     let mut buffer = Blocking::new(buffer);
///     buffer.insert_all(vec![2, 1]).unwrap();
///     assert_eq!(buffer.len(), 2);
/// }
/// ```
pub type DynBuffer<'a, T> = Box<dyn Buffer<T> + Send + 'a>;

impl<T, B> Buffer<T> for Box<B>
where
    B: Buffer<T> + ?Sized,
{
    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn insert(&mut self, value: T) -> Result<()> {
        (**self).insert(value)
    }

    fn insert_all(&mut self, values: Vec<T>) -> Result<()> {
        (**self).insert_all(values)
    }

    fn remove_first(&mut self) -> Result<T> {
        (**self).remove_first()
    }

    fn peek_first(&self) -> Result<T>
    where
        T: Clone,
    {
        (**self).peek_first()
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        (**self).for_each(f)
    }

    fn flush(&mut self) -> Result<Vec<T>> {
        (**self).flush()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
