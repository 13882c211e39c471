#[allow(clippy::module_inception)]
mod hash_bag;
pub use hash_bag::HashBag;
mod container;
#[cfg(feature = "config")]
pub(crate) mod config;
