use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Concurrent wrapper with a lock.
///
/// Makes a buffer or a container thread safe by sequentializing its
/// access: every single operation runs under one mutual exclusion lock
/// owned by the wrapper. Shallow copies obtained with
/// [`Concurrent::clone()`](trait.Concurrent.html#tymethod.clone) share the
/// wrapped collection and its lock and can be sent to other threads.
///
/// Sequences of operations (e.g visit then remove) are not atomic.
/// Callers needing such a sequence to be atomic must hold the guard
/// returned by [`lock()`](struct.Synchronized.html#method.lock) for the
/// whole sequence, and must not call the wrapper's own methods meanwhile.
///
/// Return values and errors of the wrapped collection are forwarded
/// unchanged.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Buffer, Concurrent, Synchronized};
///
/// let mut b1 = Synchronized::new(ArrayBuffer::new());
/// let mut b2 = Concurrent::clone(&b1);
///
/// std::thread::spawn(move || b2.insert(4).unwrap()).join().unwrap();
/// assert_eq!(b1.remove_first().unwrap(), 4);
///
/// // Atomic sequence: move the first element at the back.
/// {
///     let mut buffer = b1.lock();
///     buffer.insert(1).unwrap();
///     let first = buffer.remove_first().unwrap();
///     buffer.insert(first).unwrap();
/// }
/// assert_eq!(b1.len(), 1);
/// ```
pub struct Synchronized<C> {
    pub(super) inner: Arc<Mutex<C>>,
}

impl<C> Synchronized<C> {
    /// Construct a new concurrent collection wrapping an existing one.
    pub fn new(inner: C) -> Self {
        tracing::debug!(
            decorator = "synchronized",
            inner = std::any::type_name::<C>(),
            "decorating"
        );
        Synchronized {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Acquire the lock of this wrapper for exclusive access to the
    /// wrapped collection.
    ///
    /// The lock is released when the guard is dropped. Calling a method
    /// of this wrapper, or of one of its clones, from the same thread
    /// while the guard is alive deadlocks.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock()
    }
}
