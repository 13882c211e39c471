#[allow(clippy::module_inception)]
mod unmodifiable;
pub use unmodifiable::Unmodifiable;
mod buffer;
mod container;
#[cfg(feature = "config")]
pub(crate) mod config;
