use super::{ConfigError, ConfigInstance, GenericConfig, GenericElement};
use crate::{DynBuffer, DynContainer};
use std::io::Read;

/// Entry point to build a decorator chain from a configuration.
///
/// The configuration is fully validated when it is parsed: an unknown
/// `id`, a missing or mistyped field, a zero timeout or a blocking
/// decorator over a container are all reported by
/// [`from_string()`](struct.ConfigBuilder.html#method.from_string) and
/// [`from_file()`](struct.ConfigBuilder.html#method.from_file).
///
/// ## Examples
///
/// ```
/// use bufbag::Container;
/// use bufbag::config::ConfigBuilder;
///
/// let config_str = "
/// id = 'UnmodifiableConfig'
/// [inner]
/// id = 'TreeBagConfig'
/// ";
/// let builder = ConfigBuilder::from_string(config_str).unwrap();
/// assert!(builder.is_container());
/// let mut bag = builder.build_container::<u8>().unwrap();
/// assert!(bag.add(1, 1).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    config: GenericConfig,
}

impl ConfigBuilder {
    /// Parse a configuration from a toml string.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml(&value)
    }

    /// Parse a configuration from a toml file.
    pub fn from_file<P: AsRef<std::path::Path> + std::fmt::Debug>(
        path: P,
    ) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(&path)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        tracing::debug!(?path, "read configuration file");
        Self::from_string(s.as_str())
    }

    /// The `id` of the outermost configuration.
    pub fn config_id(&self) -> &str {
        self.config.id.as_str()
    }

    /// Whether this configuration can be built into a buffer.
    pub fn is_buffer(&self) -> bool {
        self.config.is_buffer()
    }

    /// Whether this configuration can be built into a container.
    pub fn is_container(&self) -> bool {
        self.config.is_container()
    }

    /// Build the configured chain into a buffer.
    pub fn build_buffer<'a, T: 'a + GenericElement>(
        &self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let buffer = self.config.build_buffer()?;
        tracing::debug!(id = self.config_id(), "built buffer from configuration");
        Ok(buffer)
    }

    /// Build the configured chain into a container.
    pub fn build_container<'a, T: 'a + GenericElement>(
        &self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        let container = self.config.build_container()?;
        tracing::debug!(
            id = self.config_id(),
            "built container from configuration"
        );
        Ok(container)
    }
}

impl ConfigInstance for ConfigBuilder {
    fn id() -> &'static str {
        "ConfigBuilder"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        Ok(ConfigBuilder {
            config: GenericConfig::from_toml(value)?,
        })
    }
}
