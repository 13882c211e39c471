#[allow(clippy::module_inception)]
mod array;
pub use array::ArrayBuffer;
mod buffer;
#[cfg(feature = "config")]
pub(crate) mod config;
