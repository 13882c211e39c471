use super::Predicate;
use crate::{Error, Result};

/// Validating wrapper.
///
/// [`Predicated`] rejects insertion of elements failing a
/// [`Predicate`](trait.Predicate.html).
/// Elements already in the wrapped collection are checked when the
/// wrapper is built and the construction fails if one of them is rejected.
/// Then every insertion path validates its elements before forwarding
/// them: a rejected insertion fails with
/// [`Error::InvalidArgument`](enum.Error.html#variant.InvalidArgument)
/// and leaves the wrapped collection untouched. Bulk insertions validate
/// every element before forwarding any of them.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer, Error, Predicated};
///
/// let mut buffer = Predicated::buffer(ArrayBuffer::new(), |s: &&str| !s.is_empty()).unwrap();
///
/// buffer.insert("ok").unwrap();
/// assert!(matches!(buffer.insert(""), Err(Error::InvalidArgument(_))));
/// assert!(matches!(buffer.insert_all(vec!["a", ""]), Err(Error::InvalidArgument(_))));
/// assert_eq!(buffer.len(), 1);
/// ```
pub struct Predicated<C, P> {
    pub(super) inner: C,
    pub(super) predicate: P,
}

impl<C, P> Predicated<C, P> {
    /// Access the wrapped collection.
    ///
    /// Elements inserted directly in the returned collection bypass
    /// validation.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Unwrap the validated collection.
    pub fn into_inner(self) -> C {
        self.inner
    }

    pub(super) fn validate<T>(&self, value: &T) -> Result<()>
    where
        P: Predicate<T>,
    {
        if self.predicate.evaluate(value) {
            Ok(())
        } else {
            let msg = format!("element rejected by {}", self.predicate.describe());
            tracing::debug!(%msg, "rejected element");
            Err(Error::InvalidArgument(msg))
        }
    }

    /// Build the wrapper once the existing elements are known to be valid.
    pub(super) fn checked<T>(inner: C, predicate: P, rejected: usize) -> Result<Self>
    where
        P: Predicate<T>,
    {
        if rejected > 0 {
            return Err(Error::invalid(format!(
                "{} element(s) already stored are rejected by {}",
                rejected,
                predicate.describe()
            )));
        }
        tracing::debug!(
            decorator = "predicated",
            inner = std::any::type_name::<C>(),
            predicate = %predicate.describe(),
            "decorating"
        );
        Ok(Predicated { inner, predicate })
    }
}

