#[allow(clippy::module_inception)]
mod blocking;
pub use blocking::{Blocking, Wake};
mod buffer;
mod concurrent;
#[cfg(feature = "config")]
pub(crate) mod config;
