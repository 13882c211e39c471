use crate::transformer::Transformer;
use crate::{
    Container, KindSet, Kinded, Predicate, Predicated, Result, Synchronized,
    Transformed, Typed, Unmodifiable,
};

/// Wrap `container` so that every operation runs under one lock.
///
/// See [`Synchronized`](../../struct.Synchronized.html).
pub fn synchronized<C>(container: C) -> Synchronized<C> {
    Synchronized::new(container)
}

/// Wrap `container` so that every mutation fails.
///
/// See [`Unmodifiable`](../../struct.Unmodifiable.html).
pub fn unmodifiable<C>(container: C) -> Unmodifiable<C> {
    Unmodifiable::new(container)
}

/// Wrap `container` so that addition of elements rejected by `predicate`
/// fails.
///
/// Fails with
/// [`Error::InvalidArgument`](../../enum.Error.html#variant.InvalidArgument)
/// if an element already in `container` is rejected.
/// See [`Predicated`](../../struct.Predicated.html).
///
/// ```
/// use bufbag::{Container, Error, HashBag};
/// use bufbag::compose::containers;
///
/// let mut bag = containers::predicated(HashBag::new(), |w: &&str| w.len() < 8).unwrap();
/// bag.add("short", 2).unwrap();
/// assert!(matches!(bag.add("very long word", 1), Err(Error::InvalidArgument(_))));
/// assert_eq!(bag.len(), 2);
/// ```
pub fn predicated<T, C, P>(container: C, predicate: P) -> Result<Predicated<C, P>>
where
    C: Container<T>,
    P: Predicate<T>,
{
    Predicated::container(container, predicate)
}

/// Wrap `container` so that addition of elements outside of `kinds` fails.
///
/// Fails with
/// [`Error::InvalidArgument`](../../enum.Error.html#variant.InvalidArgument)
/// if an element already in `container` has another kind.
/// See [`Typed`](../../type.Typed.html).
pub fn typed<T, C>(container: C, kinds: KindSet<T::Kind>) -> Result<Typed<C, T::Kind>>
where
    T: Kinded,
    C: Container<T>,
{
    Predicated::container(container, kinds)
}

/// Wrap `container` so that added elements are rewritten by `transformer`.
/// Elements already in `container` are left untouched.
///
/// See [`Transformed`](../../struct.Transformed.html).
pub fn transformed<T, C, F>(container: C, transformer: F) -> Transformed<C, F>
where
    C: Container<T>,
    F: Transformer<T>,
{
    Transformed::new(container, transformer)
}

/// Wrap `container` so that added elements are rewritten by `transformer`,
/// and rewrite the elements already in `container`.
///
/// Fails if the transform of an existing element fails.
pub fn transformed_in_place<T, C, F>(
    container: C,
    transformer: F,
) -> Result<Transformed<C, F>>
where
    C: Container<T>,
    F: Transformer<T>,
{
    Transformed::decorate_container(container, transformer)
}

#[cfg(test)]
mod tests {
    use crate::compose::containers;
    use crate::transformer::map;
    use crate::{Container, Error, HashBag, KindSet, Kinded, SortedContainer, TreeBag};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Token {
        Word(u8),
        Number(u8),
    }

    impl Kinded for Token {
        type Kind = &'static str;
        fn kind(&self) -> &'static str {
            match self {
                Token::Word(_) => "word",
                Token::Number(_) => "number",
            }
        }
    }

    #[test]
    fn predicated_typed() {
        let words = containers::typed(TreeBag::<Token>::new(), KindSet::of("word")).unwrap();
        let mut bag =
            containers::predicated(words, |t: &Token| !matches!(t, Token::Word(0))).unwrap();

        assert!(bag.add(Token::Word(1), 2).unwrap());
        assert!(matches!(bag.add(Token::Number(1), 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(bag.add(Token::Word(0), 1), Err(Error::InvalidArgument(_))));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.first(), Ok(Token::Word(1)));
    }

    #[test]
    fn in_place_then_unmodifiable() {
        let mut backing = HashBag::new();
        backing.add_all(vec![1u8, 2, 3]).unwrap();
        let doubled = containers::transformed_in_place(backing, map(|v: u8| v * 2)).unwrap();
        let mut bag = containers::unmodifiable(doubled);

        assert_eq!(bag.count_of(&2), 1);
        assert_eq!(bag.count_of(&3), 0);
        assert!(matches!(bag.add(4, 1), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn synchronized_transformed() {
        let mut bag = containers::synchronized(containers::transformed(
            HashBag::new(),
            map(|s: String| s.to_lowercase()),
        ));
        bag.add(String::from("Hello"), 1).unwrap();
        bag.add(String::from("HELLO"), 1).unwrap();
        assert_eq!(bag.count_of(&String::from("hello")), 2);
    }
}
