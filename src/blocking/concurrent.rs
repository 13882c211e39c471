use super::Blocking;
use crate::Concurrent;
use std::sync::Arc;

impl<B: Send> Concurrent for Blocking<B> {
    fn clone(&self) -> Self {
        Blocking {
            monitor: Arc::clone(&self.monitor),
            wake: self.wake,
            timeout: self.timeout,
        }
    }
}
