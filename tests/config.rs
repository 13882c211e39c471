#![cfg(feature = "config")]

use bufbag::compose::buffers;
use bufbag::config::{ConfigBuilder, ConfigError};
use bufbag::{Buffer, Error};
use std::time::Duration;

const CHAIN: &str = "
id = 'BlockingConfig'
wake = 'all'
timeout_ms = 30
[inner]
id = 'SynchronizedConfig'
[inner.inner]
id = 'PriorityBufferConfig'
descending = true
";

#[test]
fn chain_from_file() {
    let path = std::env::temp_dir()
        .join(format!("bufbag-chain-{}.toml", std::process::id()));
    std::fs::write(&path, CHAIN).unwrap();
    let builder = ConfigBuilder::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    let mut buffer = builder.unwrap().build_buffer::<u32>().unwrap();
    buffer.insert_all(vec![1, 7, 3]).unwrap();
    assert_eq!(buffer.remove_first().unwrap(), 7);
    assert_eq!(buffer.flush().unwrap(), vec![3, 1]);
    assert_eq!(
        buffer.remove_first(),
        Err(Error::Timeout(Duration::from_millis(30)))
    );
}

#[test]
fn configured_store_accepts_code_decorators() {
    let built = ConfigBuilder::from_string("id='ArrayBufferConfig'")
        .unwrap()
        .build_buffer::<i32>()
        .unwrap();
    let mut buffer = buffers::predicated(built, |x: &i32| *x >= 0).unwrap();
    assert!(buffer.insert(-1).is_err());
    buffer.insert(1).unwrap();
    assert_eq!(buffer.len(), 1);
}

#[test]
fn blocking_container_is_rejected() {
    let config_str = "
id = 'BlockingConfig'
[inner]
id = 'TreeBagConfig'
";
    assert!(matches!(
        ConfigBuilder::from_string(config_str),
        Err(ConfigError::ConfigFormatError(_))
    ));
}
