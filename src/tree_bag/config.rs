use crate::config::{
    parse, ConfigError, ConfigInstance, ContainerConfig, GenericElement,
};
use crate::{DynContainer, TreeBag};
use serde::{Deserialize, Serialize};

/// Configuration format for [`TreeBag`](../../struct.TreeBag.html) containers.
///
/// This configuration format has a single field:
/// `id = "TreeBagConfig"`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TreeBagConfig {
    #[allow(dead_code)]
    id: String,
}

impl ConfigInstance for TreeBagConfig {
    fn id() -> &'static str {
        "TreeBagConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        parse(Self::id(), value)
    }
}

impl ContainerConfig for TreeBagConfig {
    fn build_container<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynContainer<'a, T>, ConfigError> {
        Ok(Box::new(TreeBag::<T>::new()))
    }
}
