use std::time::Duration;
use thiserror::Error;

/// Failure conditions of buffers, containers and their decorators.
///
/// Every variant is a distinct kind so that callers can tell a rejected
/// value from an empty collection, an expired wait or a cancelled one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input is invalid or an element was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A mutation was attempted through a read-only wrapper.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// Removal or lookup of the first element of an empty collection.
    #[error("collection is empty")]
    Underflow,
    /// A bounded wait for an element expired.
    #[error("no element became available within {0:?}")]
    Timeout(Duration),
    /// A blocked wait was interrupted.
    #[error("wait was cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
