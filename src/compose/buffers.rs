use crate::transformer::Transformer;
use crate::{
    Blocking, Buffer, KindSet, Kinded, Predicate, Predicated, Result,
    Synchronized, Transformed, Typed, Unmodifiable, Wake,
};
use std::time::Duration;

/// Wrap `buffer` so that every operation runs under one lock.
///
/// See [`Synchronized`](../../struct.Synchronized.html).
pub fn synchronized<B>(buffer: B) -> Synchronized<B> {
    Synchronized::new(buffer)
}

/// Wrap `buffer` so that removal from an empty buffer waits for an
/// element without time limit.
///
/// See [`Blocking`](../../struct.Blocking.html).
pub fn blocking<B>(buffer: B) -> Blocking<B> {
    Blocking::new(buffer)
}

/// Wrap `buffer` so that removal from an empty buffer waits at most
/// `timeout` for an element.
///
/// Fails with
/// [`Error::InvalidArgument`](../../enum.Error.html#variant.InvalidArgument)
/// if `timeout` is zero.
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer, Error, Wake};
/// use bufbag::compose::buffers;
/// use std::time::Duration;
///
/// let timeout = Duration::from_millis(10);
/// let mut buffer =
///     buffers::blocking_with(ArrayBuffer::<u8>::new(), Wake::All, timeout).unwrap();
/// assert_eq!(buffer.remove_first(), Err(Error::Timeout(timeout)));
///
/// assert!(buffers::blocking_with(ArrayBuffer::<u8>::new(), Wake::One, Duration::ZERO).is_err());
/// ```
pub fn blocking_with<B>(
    buffer: B,
    wake: Wake,
    timeout: Duration,
) -> Result<Blocking<B>> {
    Blocking::new(buffer).with_wake(wake).with_timeout(timeout)
}

/// Wrap `buffer` so that every mutation fails.
///
/// See [`Unmodifiable`](../../struct.Unmodifiable.html).
pub fn unmodifiable<B>(buffer: B) -> Unmodifiable<B> {
    Unmodifiable::new(buffer)
}

/// Wrap `buffer` so that insertion of elements rejected by `predicate`
/// fails.
///
/// Fails with
/// [`Error::InvalidArgument`](../../enum.Error.html#variant.InvalidArgument)
/// if an element already in `buffer` is rejected.
/// See [`Predicated`](../../struct.Predicated.html).
pub fn predicated<T, B, P>(buffer: B, predicate: P) -> Result<Predicated<B, P>>
where
    B: Buffer<T>,
    P: Predicate<T>,
{
    Predicated::buffer(buffer, predicate)
}

/// Wrap `buffer` so that insertion of elements outside of `kinds` fails.
///
/// Fails with
/// [`Error::InvalidArgument`](../../enum.Error.html#variant.InvalidArgument)
/// if an element already in `buffer` has another kind.
/// See [`Typed`](../../type.Typed.html).
pub fn typed<T, B>(buffer: B, kinds: KindSet<T::Kind>) -> Result<Typed<B, T::Kind>>
where
    T: Kinded,
    B: Buffer<T>,
{
    Predicated::buffer(buffer, kinds)
}

/// Wrap `buffer` so that inserted elements are rewritten by `transformer`.
/// Elements already in `buffer` are left untouched.
///
/// See [`Transformed`](../../struct.Transformed.html).
pub fn transformed<T, B, F>(buffer: B, transformer: F) -> Transformed<B, F>
where
    B: Buffer<T>,
    F: Transformer<T>,
{
    Transformed::new(buffer, transformer)
}

/// Wrap `buffer` so that inserted elements are rewritten by `transformer`,
/// and rewrite the elements already in `buffer`.
///
/// Fails if the transform of an existing element fails.
pub fn transformed_in_place<T, B, F>(
    buffer: B,
    transformer: F,
) -> Result<Transformed<B, F>>
where
    B: Buffer<T>,
    F: Transformer<T>,
{
    Transformed::decorate_buffer(buffer, transformer)
}

#[cfg(test)]
mod tests {
    use crate::compose::buffers;
    use crate::tests::TestValue;
    use crate::transformer::map;
    use crate::{ArrayBuffer, Buffer, Concurrent, Error, KindSet, Kinded};
    use std::thread;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Reading(i32);

    impl Kinded for Reading {
        type Kind = bool;
        fn kind(&self) -> bool {
            self.0 >= 0
        }
    }

    #[test]
    fn chain() {
        let typed = buffers::typed(ArrayBuffer::<Reading>::new(), KindSet::of(true)).unwrap();
        let small = buffers::predicated(typed, |r: &Reading| r.0 < 100).unwrap();
        let mut buffer = buffers::synchronized(small);

        buffer.insert(Reading(1)).unwrap();
        assert!(matches!(buffer.insert(Reading(-1)), Err(Error::InvalidArgument(_))));
        assert!(matches!(buffer.insert(Reading(100)), Err(Error::InvalidArgument(_))));
        assert!(matches!(buffer.insert(Reading(-100)), Err(Error::InvalidArgument(_))));
        assert_eq!(buffer.len(), 1);

        let mut reader = buffers::unmodifiable(Concurrent::clone(&buffer));
        assert_eq!(reader.peek_first(), Ok(Reading(1)));
        assert!(matches!(reader.remove_first(), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn blocking_transformed() {
        let transformed =
            buffers::transformed(ArrayBuffer::new(), map(|v: TestValue| v + 1));
        let consumer = buffers::blocking(transformed);
        let mut producer = Concurrent::clone(&consumer);

        let handle = thread::spawn(move || {
            let mut consumer = consumer;
            (0..10).map(|_| consumer.remove_first().unwrap()).collect::<Vec<_>>()
        });
        for i in 0..10 {
            producer.insert(i).unwrap();
        }
        assert_eq!(handle.join().unwrap(), (1..11).collect::<Vec<TestValue>>());
    }

    #[test]
    fn in_place() {
        let backing: ArrayBuffer<TestValue> = (0..4).collect();
        let mut buffer =
            buffers::transformed_in_place(backing, map(|v: TestValue| v * 3)).unwrap();
        assert_eq!(buffer.flush().unwrap(), vec![0, 3, 6, 9]);
    }
}
