use crate::config::{
    parse, BufferConfig, ConfigError, ConfigInstance, GenericElement,
};
use crate::{ArrayBuffer, DynBuffer};
use serde::{Deserialize, Serialize};

/// Configuration format for [`ArrayBuffer`](../../struct.ArrayBuffer.html)
/// buffers.
///
/// This configuration format is composed of:
/// - `id = "ArrayBufferConfig"` and
/// - an optional `capacity = <int>`, the number of elements the buffer
///   holds before it reallocates.
/// ```
/// use bufbag::Buffer;
/// use bufbag::config::ConfigBuilder;
///
/// let buffer = ConfigBuilder::from_string("
/// id = 'ArrayBufferConfig'
/// capacity = 10
/// ")
/// .unwrap()
/// .build_buffer::<u64>()
/// .unwrap();
/// assert!(buffer.is_empty());
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ArrayBufferConfig {
    #[allow(dead_code)]
    id: String,
    #[serde(default)]
    capacity: usize,
}

impl ConfigInstance for ArrayBufferConfig {
    fn id() -> &'static str {
        "ArrayBufferConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        parse(Self::id(), value)
    }
}

impl BufferConfig for ArrayBufferConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        let buffer = ArrayBuffer::<T>::try_with_capacity(self.capacity)
            .map_err(|e| {
                ConfigError::ConfigFormatError(format!(
                    "Invalid ArrayBufferConfig: {}",
                    e
                ))
            })?;
        Ok(Box::new(buffer))
    }
}
