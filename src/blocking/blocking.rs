use crate::{Buffer, Error, Result};
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which waiters an insertion wakes up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Wake {
    /// Wake a single waiter per inserted element.
    #[default]
    One,
    /// Wake every waiter and let them race for the element.
    All,
}

/// State guarded by the monitor lock.
pub(super) struct State<B> {
    pub(super) buffer: B,
    /// Number of callers parked on the condition.
    pub(super) waiting: usize,
    /// Incremented by every interrupt. A waiter observing a different
    /// value than when it started waiting was interrupted.
    pub(super) interrupts: u64,
}

/// Lock and wait condition of one [`Blocking`] buffer and its clones.
pub(super) struct Monitor<B> {
    pub(super) state: Mutex<State<B>>,
    pub(super) available: Condvar,
}

/// Buffer wrapper turning removal from an empty buffer into a wait.
///
/// Every operation of a [`Blocking`] buffer runs under one lock.
/// When [`remove_first()`](trait.Buffer.html#tymethod.remove_first) or
/// [`peek_first()`](trait.Buffer.html#tymethod.peek_first) find the wrapped
/// buffer empty, the calling thread releases the lock and sleeps until an
/// element is inserted by another thread, instead of failing with
/// [`Error::Underflow`](enum.Error.html#variant.Underflow).
///
/// Waits are unbounded unless a default timeout is set with
/// [`with_timeout()`](struct.Blocking.html#method.with_timeout). The bounded
/// methods [`remove_first_timeout()`](struct.Blocking.html#method.remove_first_timeout)
/// and [`peek_first_timeout()`](struct.Blocking.html#method.peek_first_timeout)
/// fail with [`Error::Timeout`](enum.Error.html#variant.Timeout) when no
/// element shows up in time. Any waiting caller can be released with
/// [`interrupt()`](struct.Blocking.html#method.interrupt), in which case it
/// fails with [`Error::Cancelled`](enum.Error.html#variant.Cancelled).
///
/// Every insertion happening while callers wait wakes at least one of
/// them. The order in which several waiters are served is not specified.
/// Sequences of operations that must not interleave with other callers
/// run under the lock with
/// [`with_lock()`](struct.Blocking.html#method.with_lock).
///
/// Shallow copies obtained with
/// [`Concurrent::clone()`](trait.Concurrent.html#tymethod.clone) share the
/// wrapped buffer, lock and wait condition.
///
/// ## Examples
///
/// ```
/// use bufbag::{ArrayBuffer, Blocking, Buffer, Concurrent};
/// use std::thread;
///
/// let mut consumer = Blocking::new(ArrayBuffer::new());
/// let mut producer = Concurrent::clone(&consumer);
///
/// let handle = thread::spawn(move || consumer.remove_first().unwrap());
/// producer.insert("hello").unwrap();
/// assert_eq!(handle.join().unwrap(), "hello");
/// ```
pub struct Blocking<B> {
    pub(super) monitor: Arc<Monitor<B>>,
    pub(super) wake: Wake,
    pub(super) timeout: Option<Duration>,
}

impl<B> Blocking<B> {
    /// Wrap `buffer` with unbounded waits, waking one waiter per insertion.
    pub fn new(buffer: B) -> Self {
        tracing::debug!(
            decorator = "blocking",
            inner = std::any::type_name::<B>(),
            "decorating"
        );
        Blocking {
            monitor: Arc::new(Monitor {
                state: Mutex::new(State {
                    buffer,
                    waiting: 0,
                    interrupts: 0,
                }),
                available: Condvar::new(),
            }),
            wake: Wake::One,
            timeout: None,
        }
    }

    /// Set which waiters are woken up when an element is inserted.
    pub fn with_wake(mut self, wake: Wake) -> Self {
        self.wake = wake;
        self
    }

    /// Bound the waits of
    /// [`remove_first()`](trait.Buffer.html#tymethod.remove_first) and
    /// [`peek_first()`](trait.Buffer.html#tymethod.peek_first) to `timeout`.
    ///
    /// A zero `timeout` is rejected with
    /// [`Error::InvalidArgument`](enum.Error.html#variant.InvalidArgument).
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::invalid("blocking timeout must be positive"));
        }
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Which waiters an insertion wakes up.
    pub fn wake(&self) -> Wake {
        self.wake
    }

    /// Default bound of blocking waits, `None` when waits are unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the number of callers currently waiting for an element.
    /// Zero means no caller waits.
    pub fn waiting(&self) -> usize {
        self.monitor.state.lock().waiting
    }

    /// Release every caller currently waiting on this buffer or one of
    /// its clones. Released callers fail with
    /// [`Error::Cancelled`](enum.Error.html#variant.Cancelled).
    /// Callers starting to wait after this call are not affected.
    pub fn interrupt(&self) {
        let mut state = self.monitor.state.lock();
        state.interrupts = state.interrupts.wrapping_add(1);
        tracing::debug!(waiting = state.waiting, "interrupting waiters");
        self.monitor.available.notify_all();
    }

    /// Remove the first element, waiting at most `timeout` for one.
    pub fn remove_first_timeout<T>(&self, timeout: Duration) -> Result<T>
    where
        B: Buffer<T>,
    {
        self.wait_for::<T, _, _>(Some(timeout), |b| b.remove_first())
    }

    /// Peek at the first element, waiting at most `timeout` for one.
    pub fn peek_first_timeout<T>(&self, timeout: Duration) -> Result<T>
    where
        B: Buffer<T>,
        T: Clone,
    {
        self.wait_for::<T, _, _>(Some(timeout), |b| b.peek_first())
    }

    /// Run `f` on the wrapped buffer while holding the lock.
    ///
    /// No other operation of this buffer or of its clones runs while `f`
    /// runs, so a sequence of operations in `f` is atomic. `f` must not
    /// call methods of this buffer or of its clones: the lock is not
    /// reentrant. Waiters are woken up once `f` returns if it left
    /// elements in the buffer.
    ///
    /// ```
    /// use bufbag::{ArrayBuffer, Blocking, Buffer};
    ///
    /// let buffer = Blocking::new(ArrayBuffer::<u32>::new());
    /// let pair = buffer.with_lock(|b| -> bufbag::Result<()> {
    ///     b.insert(1)?;
    ///     b.insert(2)
    /// });
    /// assert!(pair.is_ok());
    /// assert_eq!(buffer.len(), 2);
    /// ```
    pub fn with_lock<T, R, F>(&self, f: F) -> R
    where
        B: Buffer<T>,
        F: FnOnce(&mut B) -> R,
    {
        let mut state = self.lock();
        let out = f(&mut state.buffer);
        if state.waiting > 0 && !state.buffer.is_empty() {
            self.monitor.available.notify_all();
        }
        out
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, State<B>> {
        self.monitor.state.lock()
    }

    /// Notify waiters of new elements according to the wake policy.
    pub(super) fn signal(&self) {
        match self.wake {
            Wake::One => {
                self.monitor.available.notify_one();
            }
            Wake::All => {
                self.monitor.available.notify_all();
            }
        }
    }

    /// Wait until the buffer holds an element, then apply `take` to it.
    ///
    /// The emptiness check is repeated after every wakeup: a wakeup may be
    /// spurious or the element may have been taken by another caller.
    /// The deadline is computed once, so repeated wakeups do not extend
    /// the wait.
    pub(super) fn wait_for<T, R, F>(
        &self,
        timeout: Option<Duration>,
        mut take: F,
    ) -> Result<R>
    where
        B: Buffer<T>,
        F: FnMut(&mut B) -> Result<R>,
    {
        // A deadline past the range of `Instant` is no deadline.
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
        let mut state = self.monitor.state.lock();
        let interrupts = state.interrupts;

        loop {
            if !state.buffer.is_empty() {
                let out = take(&mut state.buffer);
                // Elements left behind: pass the wakeup on.
                if !state.buffer.is_empty() && state.waiting > 0 {
                    self.monitor.available.notify_one();
                }
                return out;
            }

            state.waiting += 1;
            tracing::trace!(waiting = state.waiting, "waiting for an element");
            let timed_out = match deadline {
                None => {
                    self.monitor.available.wait(&mut state);
                    false
                }
                Some(deadline) => self
                    .monitor
                    .available
                    .wait_until(&mut state, deadline)
                    .timed_out(),
            };
            state.waiting -= 1;
            tracing::trace!(timed_out, "woken up");

            if state.interrupts != interrupts {
                tracing::debug!("wait cancelled");
                if !state.buffer.is_empty() && state.waiting > 0 {
                    self.monitor.available.notify_one();
                }
                return Err(Error::Cancelled);
            }
            if timed_out && state.buffer.is_empty() {
                let timeout = timeout.unwrap_or_default();
                tracing::debug!(?timeout, "wait timed out");
                return Err(Error::Timeout(timeout));
            }
        }
    }
}
