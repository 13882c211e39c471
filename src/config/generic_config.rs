use super::configs::{
    ArrayBufferConfig, BlockingConfig, HashBagConfig, PriorityBufferConfig,
    SynchronizedConfig, TreeBagConfig, UnmodifiableConfig,
};
use super::{
    BufferConfig, ConfigError, ConfigInstance, ContainerConfig,
    GenericElement,
};
use crate::{DynBuffer, DynContainer};

const BUFFER_CONFIGS: [&str; 5] = [
    "ArrayBufferConfig",
    "PriorityBufferConfig",
    "SynchronizedConfig",
    "BlockingConfig",
    "UnmodifiableConfig",
];

const CONTAINER_CONFIGS: [&str; 4] = [
    "HashBagConfig",
    "TreeBagConfig",
    "SynchronizedConfig",
    "UnmodifiableConfig",
];

/// Configuration of any store or decorator, dispatched on its `id`.
///
/// Parsing a [`GenericConfig`] parses the configuration its `id` selects,
/// so that a chain is fully validated before anything is built.
#[derive(Clone, Debug)]
pub(crate) struct GenericConfig {
    pub(crate) id: String,
    value: toml::Value,
}

impl GenericConfig {
    fn check<C: ConfigInstance>(&self) -> Result<(), ConfigError> {
        C::from_toml(&self.value).map(|_| ())
    }

    pub(crate) fn is_buffer(&self) -> bool {
        BUFFER_CONFIGS.contains(&self.id.as_str())
    }

    pub(crate) fn is_container(&self) -> bool {
        CONTAINER_CONFIGS.contains(&self.id.as_str())
    }

    pub(crate) fn build_buffer<'a, T: 'a + GenericElement>(
        &self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let value = &self.value;
        match self.id.as_str() {
            "ArrayBufferConfig" => {
                ArrayBufferConfig::from_toml(value)?.build_buffer()
            }
            "PriorityBufferConfig" => {
                PriorityBufferConfig::from_toml(value)?.build_buffer()
            }
            "SynchronizedConfig" => {
                SynchronizedConfig::from_toml(value)?.build_buffer()
            }
            "BlockingConfig" => {
                BlockingConfig::from_toml(value)?.build_buffer()
            }
            "UnmodifiableConfig" => {
                UnmodifiableConfig::from_toml(value)?.build_buffer()
            }
            id => Err(ConfigError::ConfigFormatError(format!(
                "{} does not describe a buffer. Possible values are: {:?}.",
                id, BUFFER_CONFIGS
            ))),
        }
    }

    pub(crate) fn build_container<'a, T: 'a + GenericElement>(
        &self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        let value = &self.value;
        match self.id.as_str() {
            "HashBagConfig" => {
                HashBagConfig::from_toml(value)?.build_container()
            }
            "TreeBagConfig" => {
                TreeBagConfig::from_toml(value)?.build_container()
            }
            "SynchronizedConfig" => {
                SynchronizedConfig::from_toml(value)?.build_container()
            }
            "UnmodifiableConfig" => {
                UnmodifiableConfig::from_toml(value)?.build_container()
            }
            id => Err(ConfigError::ConfigFormatError(format!(
                "{} does not describe a container. Possible values are: {:?}.",
                id, CONTAINER_CONFIGS
            ))),
        }
    }
}

impl ConfigInstance for GenericConfig {
    fn id() -> &'static str {
        "GenericConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must be a toml table.",
                )))
            }
        };

        let id = match table.get("id") {
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must have an 'id' field.",
                )))
            }
            Some(toml::Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Invalid id type, must be a string.",
                )))
            }
        };

        let config = GenericConfig {
            id,
            value: value.clone(),
        };

        match config.id.as_str() {
            "ArrayBufferConfig" => config.check::<ArrayBufferConfig>(),
            "PriorityBufferConfig" => config.check::<PriorityBufferConfig>(),
            "HashBagConfig" => config.check::<HashBagConfig>(),
            "TreeBagConfig" => config.check::<TreeBagConfig>(),
            "SynchronizedConfig" => config.check::<SynchronizedConfig>(),
            "BlockingConfig" => config.check::<BlockingConfig>(),
            "UnmodifiableConfig" => config.check::<UnmodifiableConfig>(),
            unknown => Err(ConfigError::ConfigFormatError(format!(
                "Invalid configuration type: {}.",
                unknown
            ))),
        }?;
        Ok(config)
    }
}
