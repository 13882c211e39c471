mod buffer;
pub use buffer::DynBuffer;
mod container;
pub use container::DynContainer;
