use thiserror::Error;

/// Failure to read, parse or build a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input is not valid toml.
    #[error("invalid toml: {0}")]
    TomlFormatError(#[from] toml::de::Error),
    /// Input is valid toml but does not describe a valid chain.
    #[error("invalid configuration: {0}")]
    ConfigFormatError(String),
    /// Configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),
}
