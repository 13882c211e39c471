use crate::config::{
    parse, BufferConfig, ConfigError, ConfigInstance, ContainerConfig,
    GenericConfig, GenericElement,
};
use crate::{DynBuffer, DynContainer, Synchronized};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`Synchronized`](../../struct.Synchronized.html) decorators.
///
/// This configuration format is composed of:
/// - `id = "SynchronizedConfig"` and
/// - an `[inner]` table describing the wrapped buffer or container.
/// ```
/// use bufbag::Container;
/// use bufbag::config::ConfigBuilder;
///
/// let mut bag = ConfigBuilder::from_string("
/// id = 'SynchronizedConfig'
/// [inner]
/// id = 'HashBagConfig'
/// ")
/// .unwrap()
/// .build_container::<&str>()
/// .unwrap();
/// bag.add("word", 2).unwrap();
/// assert_eq!(bag.count_of(&"word"), 2);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SynchronizedConfig {
    #[allow(dead_code)]
    id: String,
    inner: toml::Value,
}

impl ConfigInstance for SynchronizedConfig {
    fn id() -> &'static str {
        "SynchronizedConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let config: Self = parse(Self::id(), value)?;
        GenericConfig::from_toml(&config.inner)?;
        Ok(config)
    }
}

impl BufferConfig for SynchronizedConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let inner = GenericConfig::from_toml(&self.inner)?.build_buffer()?;
        Ok(Box::new(Synchronized::new(inner)))
    }
}

impl ContainerConfig for SynchronizedConfig {
    fn build_container<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        let inner =
            GenericConfig::from_toml(&self.inner)?.build_container()?;
        Ok(Box::new(Synchronized::new(inner)))
    }
}
