/// Wrapper rewriting elements before they are stored.
///
/// Every insertion path of [`Transformed`] passes each inserted element
/// once through a [`Transformer`](transformer/trait.Transformer.html)
/// and forwards the result to the wrapped collection. If the transform
/// fails, the insertion fails and the wrapped collection is left
/// untouched. Bulk insertions transform every element before forwarding
/// any of them.
///
/// Elements already stored in the wrapped collection are left as is by
/// [`Transformed::new()`](struct.Transformed.html#method.new) and are
/// transformed in place by
/// [`decorate_buffer()`](struct.Transformed.html#method.decorate_buffer) or
/// [`decorate_container()`](struct.Transformed.html#method.decorate_container).
///
/// Lookups and removals of containers receive their argument untransformed.
///
/// ## Examples
///
/// ```
/// use bufbag::{Buffer, Transformed, ArrayBuffer};
/// use bufbag::transformer::map;
///
/// let backing: ArrayBuffer<i32> = vec![1].into_iter().collect();
/// let mut buffer = Transformed::new(backing, map(|x: i32| x + 100));
///
/// buffer.insert(2).unwrap();
/// assert_eq!(buffer.remove_first().unwrap(), 1);
/// assert_eq!(buffer.remove_first().unwrap(), 102);
/// ```
pub struct Transformed<C, F> {
    pub(super) inner: C,
    pub(super) transformer: F,
}

impl<C, F> Transformed<C, F> {
    /// Wrap `inner`, leaving its current elements untransformed.
    pub fn new(inner: C, transformer: F) -> Self {
        tracing::debug!(
            decorator = "transformed",
            inner = std::any::type_name::<C>(),
            "decorating"
        );
        Transformed { inner, transformer }
    }

    /// Access the wrapped collection.
    ///
    /// Elements inserted directly in the returned collection are not
    /// transformed.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn transformer(&self) -> &F {
        &self.transformer
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}
