//! Module to instantiate decorator chains from a configuration.
//!
//! Configuration files and strings describe a backing store and the
//! decorators stacked on top of it using the [`toml`](https://toml.io/en/)
//! format. Every table carries an `id` field naming what it builds.
//! Decorators describe the store they wrap in an `[inner]` table.
//! The [`ConfigBuilder`] structure is the entry point to build a chain from
//! a configuration string or file:
//! ```
//! use bufbag::{Buffer, DynBuffer};
//! use bufbag::config::ConfigBuilder;
//!
//! let config_str = "
//! id = 'BlockingConfig'
//! wake = 'all'
//! timeout_ms = 250
//! [inner]
//! id = 'SynchronizedConfig'
//! [inner.inner]
//! id = 'ArrayBufferConfig'
//! capacity = 64
//! ";
//! let mut buffer: DynBuffer<u64> = ConfigBuilder::from_string(config_str)
//!     .unwrap()
//!     .build_buffer()
//!     .unwrap();
//! buffer.insert(1).unwrap();
//! assert_eq!(buffer.remove_first().unwrap(), 1);
//! ```
//!
//! Decorators whose collaborator is code, i.e a predicate, an element
//! kind set or a transformer, cannot be described in a configuration.
//! Wrap the built store with the [`compose`](../compose/index.html)
//! constructors instead.
//!
//! See the [`configs`] module for the collection of configuration formats.

use crate::{DynBuffer, DynContainer};
use std::hash::Hash;

/// Element trait bound for collections built from a configuration.
///
/// The kind of store a configuration describes is only known at runtime.
/// Elements of a collection built from a configuration must therefore
/// satisfy the requirements of every store that can be built: ordered for
/// priority buffers and sorted bags, hashable for hash bags, and `Send`
/// so that the result can be shared by the synchronized decorators.
pub trait GenericElement: Ord + Hash + Clone + Send {}
impl<T: Ord + Hash + Clone + Send> GenericElement for T {}

/// Configuration object parsed from a toml table.
pub trait ConfigInstance: Sized {
    /// Value of the `id` field selecting this configuration.
    fn id() -> &'static str;

    /// Parse this configuration from a toml table.
    ///
    /// Implementers can expect that input `value` is a
    /// [`toml::value::Table`] with a string `id` field.
    /// This is enforced by the [`ConfigBuilder`].
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;
}

/// Configuration that builds a [`Buffer`](../trait.Buffer.html).
pub(crate) trait BufferConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError>;
}

/// Configuration that builds a [`Container`](../trait.Container.html).
pub(crate) trait ContainerConfig {
    fn build_container<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynContainer<'a, T>, ConfigError>;
}

/// Deserialize a configuration of type `C` out of a toml value.
pub(crate) fn parse<C: serde::de::DeserializeOwned>(
    id: &str,
    value: &toml::Value,
) -> Result<C, ConfigError> {
    value.clone().try_into().map_err(|e| {
        ConfigError::ConfigFormatError(format!(
            "Invalid {}: {}\n{}",
            id, value, e
        ))
    })
}

mod error;
pub use error::ConfigError;
mod generic_config;
pub(crate) use generic_config::GenericConfig;
mod builder;
pub use builder::ConfigBuilder;

/// Configuration formats of every store and decorator that can be built
/// from a configuration.
pub mod configs {
    pub use crate::array::config::ArrayBufferConfig;
    pub use crate::blocking::config::BlockingConfig;
    pub use crate::hash_bag::config::HashBagConfig;
    pub use crate::priority::config::PriorityBufferConfig;
    pub use crate::synchronized::config::SynchronizedConfig;
    pub use crate::tree_bag::config::TreeBagConfig;
    pub use crate::unmodifiable::config::UnmodifiableConfig;
}

