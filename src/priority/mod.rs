#[allow(clippy::module_inception)]
mod priority;
pub use priority::PriorityBuffer;
mod buffer;
#[cfg(feature = "config")]
pub(crate) mod config;
