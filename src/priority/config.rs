use crate::config::{
    parse, BufferConfig, ConfigError, ConfigInstance, GenericElement,
};
use crate::{DynBuffer, PriorityBuffer};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`PriorityBuffer`](../../struct.PriorityBuffer.html) buffers.
///
/// This configuration format is composed of:
/// - `id = "PriorityBufferConfig"` and
/// - an optional `descending = <bool>`. When true, the greatest element
///   is removed first. Defaults to false.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PriorityBufferConfig {
    #[allow(dead_code)]
    id: String,
    #[serde(default)]
    descending: bool,
}

impl ConfigInstance for PriorityBufferConfig {
    fn id() -> &'static str {
        "PriorityBufferConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        parse(Self::id(), value)
    }
}

impl BufferConfig for PriorityBufferConfig {
    fn build_buffer<'a, T: 'a + GenericElement>(
        self,
    ) -> Result<DynBuffer<'a, T>, ConfigError> {
        if self.descending {
            Ok(Box::new(PriorityBuffer::<T>::descending()))
        } else {
            Ok(Box::new(PriorityBuffer::<T>::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityBufferConfig;
    use crate::config::{BufferConfig, ConfigError, ConfigInstance};
    use crate::tests::{test_buffer, TestValue};
    use crate::Buffer;

    fn config(s: &str) -> Result<PriorityBufferConfig, ConfigError> {
        let value: toml::Value = toml::from_str(s).unwrap();
        PriorityBufferConfig::from_toml(&value)
    }

    #[test]
    fn test_valid_priority_config() {
        let mut buffer = config("id='PriorityBufferConfig'\ndescending=true")
            .unwrap()
            .build_buffer::<TestValue>()
            .unwrap();
        buffer.insert_all(vec![2, 9, 4]).unwrap();
        assert_eq!(buffer.flush().unwrap(), vec![9, 4, 2]);
        test_buffer(buffer);
    }

    #[test]
    fn test_ascending_by_default() {
        let mut buffer = config("id='PriorityBufferConfig'")
            .unwrap()
            .build_buffer::<TestValue>()
            .unwrap();
        buffer.insert_all(vec![2, 9, 4]).unwrap();
        assert_eq!(buffer.remove_first().unwrap(), 2);
    }

    #[test]
    fn test_invalid_priority_config() {
        assert!(matches!(
            config("id='PriorityBufferConfig'\ndescending='yes'"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }
}
