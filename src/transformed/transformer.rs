use crate::Result;

/// Transform collaborator of a [`Transformed`](../struct.Transformed.html)
/// decorator.
///
/// Any `Fn(T) -> Result<T>` is a transformer. Infallible functions are
/// wrapped with [`map()`](fn.map.html).
pub trait Transformer<T> {
    /// Rewrite `value` before it is stored.
    fn transform(&self, value: T) -> Result<T>;
}

impl<T, F> Transformer<T> for F
where
    F: Fn(T) -> Result<T>,
{
    fn transform(&self, value: T) -> Result<T> {
        self(value)
    }
}

/// [`Transformer`] applying an infallible function.
#[derive(Clone, Copy, Debug)]
pub struct Map<F>(F);

impl<T, F> Transformer<T> for Map<F>
where
    F: Fn(T) -> T,
{
    fn transform(&self, value: T) -> Result<T> {
        Ok((self.0)(value))
    }
}

/// Make a [`Transformer`] out of an infallible function.
///
/// ```
/// use bufbag::transformer::{map, Transformer};
///
/// let upper = map(|s: String| s.to_uppercase());
/// assert_eq!(upper.transform(String::from("abc")).unwrap(), "ABC");
/// ```
pub fn map<T, F: Fn(T) -> T>(f: F) -> Map<F> {
    Map(f)
}
