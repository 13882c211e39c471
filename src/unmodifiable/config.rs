use crate::config::{
    parse, BufferConfig, ConfigError, ConfigInstance, ContainerConfig,
    GenericConfig, GenericElement,
};
use crate::{DynBuffer, DynContainer, Unmodifiable};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`Unmodifiable`](../../struct.Unmodifiable.html) decorators.
///
/// This configuration format is composed of:
/// - `id = "UnmodifiableConfig"` and
/// - an `[inner]` table describing the wrapped buffer or container.
/// ```
/// use bufbag::Container;
/// use bufbag::config::ConfigBuilder;
///
/// let mut bag = ConfigBuilder::from_string("
/// id = 'UnmodifiableConfig'
/// [inner]
/// id = 'HashBagConfig'
/// ")
/// .unwrap()
/// .build_container::<&str>()
/// .unwrap();
/// assert!(bag.add("word", 2).is_err());
/// assert_eq!(bag.count_of(&"word"), 0);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct UnmodifiableConfig {
    #[allow(dead_code)]
    id: String,
    inner: toml::Value,
}

impl ConfigInstance for UnmodifiableConfig {
    fn id() -> &'static str {
        "UnmodifiableConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let config: Self = parse(Self::id(), value)?;
        GenericConfig::from_toml(&config.inner)?;
        Ok(config)
    }
}

impl BufferConfig for UnmodifiableConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let inner = GenericConfig::from_toml(&self.inner)?.build_buffer()?;
        Ok(Box::new(Unmodifiable::new(inner)))
    }
}

impl ContainerConfig for UnmodifiableConfig {
    fn build_container<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        let inner =
            GenericConfig::from_toml(&self.inner)?.build_container()?;
        Ok(Box::new(Unmodifiable::new(inner)))
    }
}

#[cfg(test)]
mod tests {
    use super::UnmodifiableConfig;
    use crate::config::{
        BufferConfig, ConfigError, ConfigInstance, ContainerConfig,
    };
    use crate::tests::TestValue;
    use crate::{Buffer, Container, Error};

    fn config(s: &str) -> Result<UnmodifiableConfig, ConfigError> {
        let value: toml::Value = toml::from_str(s).unwrap();
        UnmodifiableConfig::from_toml(&value)
    }

    #[test]
    fn test_valid_unmodifiable_config() {
        let mut buffer =
            config("id='UnmodifiableConfig'\n[inner]\nid='ArrayBufferConfig'")
                .unwrap()
                .build_buffer::<TestValue>()
                .unwrap();
        assert!(matches!(
            buffer.insert(1),
            Err(Error::UnsupportedOperation(_))
        ));
        assert_eq!(buffer.peek_first(), Err(Error::Underflow));

        let mut container =
            config("id='UnmodifiableConfig'\n[inner]\nid='TreeBagConfig'")
                .unwrap()
                .build_container::<TestValue>()
                .unwrap();
        assert!(matches!(
            container.add(1, 1),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(container.is_empty());
    }

    #[test]
    fn test_missing_inner() {
        assert!(matches!(
            config("id='UnmodifiableConfig'"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }
}
