use crate::Predicate;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Elements carrying a runtime kind descriptor.
///
/// The kind is a closed descriptor, typically a field-less enum or a
/// [`std::any::TypeId`], compared by equality.
pub trait Kinded {
    type Kind: PartialEq + Debug;

    /// Get the kind of this element.
    fn kind(&self) -> Self::Kind;
}

impl Kinded for Box<dyn Any + Send> {
    type Kind = TypeId;

    fn kind(&self) -> TypeId {
        // The boxed value, not the box.
        (**self).type_id()
    }
}

impl Kinded for Box<dyn Any + Send + Sync> {
    type Kind = TypeId;

    fn kind(&self) -> TypeId {
        (**self).type_id()
    }
}

/// A kind and its registered subtypes.
///
/// As a [`Predicate`](trait.Predicate.html), a [`KindSet`] accepts the
/// [`Kinded`](trait.Kinded.html) elements whose kind belongs to the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindSet<K> {
    kinds: Vec<K>,
}

impl<K: PartialEq> KindSet<K> {
    /// Create a set accepting exactly `kind`.
    pub fn of(kind: K) -> Self {
        KindSet { kinds: vec![kind] }
    }

    /// Register `kind` as a subtype of the configured kind.
    pub fn with_subtype(mut self, kind: K) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Whether `kind` is the configured kind or one of its subtypes.
    pub fn contains(&self, kind: &K) -> bool {
        self.kinds.contains(kind)
    }

    /// The configured kind.
    pub fn kind(&self) -> &K {
        &self.kinds[0]
    }

    /// The registered subtypes.
    pub fn subtypes(&self) -> &[K] {
        &self.kinds[1..]
    }
}

impl<T: Kinded> Predicate<T> for KindSet<T::Kind> {
    fn evaluate(&self, value: &T) -> bool {
        self.contains(&value.kind())
    }

    fn describe(&self) -> String {
        format!("kinds {:?}", self.kinds)
    }
}
