#[allow(clippy::module_inception)]
mod predicated;
pub use predicated::Predicated;
mod predicate;
pub use predicate::Predicate;
mod buffer;
mod container;
