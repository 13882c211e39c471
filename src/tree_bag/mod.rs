#[allow(clippy::module_inception)]
mod tree_bag;
pub use tree_bag::TreeBag;
mod container;
#[cfg(feature = "config")]
pub(crate) mod config;
