use super::Synchronized;
use crate::Concurrent;
use std::sync::Arc;

impl<C: Send> Concurrent for Synchronized<C> {
    fn clone(&self) -> Self {
        Synchronized {
            inner: Arc::clone(&self.inner),
        }
    }
}
