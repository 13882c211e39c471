use crate::Error;

/// Read-only wrapper.
///
/// Read operations are forwarded to the wrapped buffer or container.
/// Every mutation fails with
/// [`Error::UnsupportedOperation`](enum.Error.html#variant.UnsupportedOperation)
/// without reaching the wrapped collection.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer, Error, Unmodifiable};
///
/// let buffer: ArrayBuffer<i32> = vec![1, 2].into_iter().collect();
/// let mut buffer = Unmodifiable::new(buffer);
///
/// assert_eq!(buffer.peek_first().unwrap(), 1);
/// assert!(matches!(buffer.remove_first(), Err(Error::UnsupportedOperation(_))));
/// assert_eq!(buffer.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Unmodifiable<C> {
    pub(super) inner: C,
}

impl<C> Unmodifiable<C> {
    pub fn new(inner: C) -> Self {
        tracing::debug!(
            decorator = "unmodifiable",
            inner = std::any::type_name::<C>(),
            "decorating"
        );
        Unmodifiable { inner }
    }

    /// Read-only access to the wrapped collection.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }
}

pub(super) fn refuse<R>(operation: &'static str) -> Result<R, Error> {
    tracing::debug!(operation, "refused mutation of unmodifiable collection");
    Err(Error::UnsupportedOperation(operation))
}
