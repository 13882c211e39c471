mod kind;
pub use kind::{KindSet, Kinded};

/// Wrapper restricting elements to a set of kinds.
///
/// [`Typed`] is a [`Predicated`](struct.Predicated.html) wrapper whose
/// predicate is a [`KindSet`](struct.KindSet.html): only elements whose
/// [kind](trait.Kinded.html) is the configured kind or one of its
/// registered subtypes are accepted. It is built with
/// [`Predicated::buffer()`](struct.Predicated.html#method.buffer) or
/// [`Predicated::container()`](struct.Predicated.html#method.container),
/// or with the [`compose`](compose/index.html) functions, and has the same
/// construction and insertion contract.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer, Error, KindSet};
/// use bufbag::compose::buffers;
/// use std::any::{Any, TypeId};
///
/// let mut buffer = buffers::typed(
///     ArrayBuffer::<Box<dyn Any + Send>>::new(),
///     KindSet::of(TypeId::of::<u32>()),
/// ).unwrap();
///
/// buffer.insert(Box::new(4u32) as Box<dyn Any + Send>).unwrap();
/// assert!(matches!(
///     buffer.insert(Box::new("four") as Box<dyn Any + Send>),
///     Err(Error::InvalidArgument(_))
/// ));
/// ```
pub type Typed<C, K> = crate::Predicated<C, KindSet<K>>;
