/// Constructors of buffer decorators.
pub mod buffers;
/// Constructors of container decorators.
pub mod containers;
