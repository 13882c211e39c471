use crate::config::{
    parse, BufferConfig, ConfigError, ConfigInstance, GenericConfig,
    GenericElement,
};
use crate::{Blocking, DynBuffer, Wake};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration format for [`Blocking`](../../struct.Blocking.html)
/// decorators.
///
/// This configuration format is composed of:
/// - `id = "BlockingConfig"`,
/// - an optional `wake = "one" | "all"`, defaulting to `"one"`,
/// - an optional positive `timeout_ms = <int>` bounding every wait,
///   waits are unbounded when it is absent, and
/// - an `[inner]` table describing the wrapped buffer.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct BlockingConfig {
    #[allow(dead_code)]
    id: String,
    #[serde(default)]
    wake: Wake,
    timeout_ms: Option<u64>,
    inner: toml::Value,
}

impl ConfigInstance for BlockingConfig {
    fn id() -> &'static str {
        "BlockingConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let config: Self = parse(Self::id(), value)?;
        if config.timeout_ms == Some(0) {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Invalid BlockingConfig: timeout_ms must be positive.",
            )));
        }
        let inner = GenericConfig::from_toml(&config.inner)?;
        if !inner.is_buffer() {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid BlockingConfig: {} is not a buffer.",
                inner.id
            )));
        }
        Ok(config)
    }
}

impl BufferConfig for BlockingConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let inner = GenericConfig::from_toml(&self.inner)?.build_buffer()?;
        let blocking = Blocking::new(inner).with_wake(self.wake);
        match self.timeout_ms {
            None => Ok(Box::new(blocking)),
            Some(ms) => blocking
                .with_timeout(Duration::from_millis(ms))
                .map(|b| Box::new(b) as DynBuffer<'a, T>)
                .map_err(|e| ConfigError::ConfigFormatError(e.to_string())),
        }
    }
}
