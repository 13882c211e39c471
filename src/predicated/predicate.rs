/// Validation collaborator of a [`Predicated`](struct.Predicated.html)
/// decorator.
///
/// Any `Fn(&T) -> bool` is a predicate. Implement this trait on a
/// dedicated type to give the predicate a description used in the error
/// message of rejected elements.
pub trait Predicate<T> {
    /// Whether `value` is accepted.
    fn evaluate(&self, value: &T) -> bool;

    /// Short description of what the predicate accepts.
    fn describe(&self) -> String {
        String::from("predicate")
    }
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, value: &T) -> bool {
        self(value)
    }
}
