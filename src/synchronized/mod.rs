#[allow(clippy::module_inception)]
mod synchronized;
pub use synchronized::Synchronized;
mod buffer;
mod concurrent;
mod container;
#[cfg(feature = "config")]
pub(crate) mod config;
