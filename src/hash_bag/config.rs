use crate::config::{
    parse, ConfigError, ConfigInstance, ContainerConfig, GenericElement,
};
use crate::{DynContainer, HashBag};
use serde::{Deserialize, Serialize};

/// Configuration format for [`HashBag`](../../struct.HashBag.html) containers.
///
/// This configuration format has a single field:
/// `id = "HashBagConfig"`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct HashBagConfig {
    #[allow(dead_code)]
    id: String,
}

impl ConfigInstance for HashBagConfig {
    fn id() -> &'static str {
        "HashBagConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        parse(Self::id(), value)
    }
}

impl ContainerConfig for HashBagConfig {
    fn build_container<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        Ok(Box::new(HashBag::<T>::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::HashBagConfig;
    use crate::config::{ConfigInstance, ContainerConfig};
    use crate::tests::{test_container, TestValue};

    #[test]
    fn test_valid_hash_bag_config() {
        let value: toml::Value = toml::from_str("id='HashBagConfig'").unwrap();
        let config = HashBagConfig::from_toml(&value).unwrap();
        test_container(config.build_container::<TestValue>().unwrap());
    }
}
