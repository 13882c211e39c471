#[allow(clippy::module_inception)]
mod transformed;
pub use transformed::Transformed;
pub(crate) mod transformer;
mod buffer;
mod container;
