// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Exclusive access to the shared race state.
//!
//! Closure-based API — no guard objects, no escaping references.

use std::sync;

/// Exclusive-access wrapper. All workers in a cohort contend on one of
/// these; the contention is the entropy source.
pub struct RaceMutex<T> {
    inner: sync::Mutex<T>,
}

impl<T> RaceMutex<T> {
    /// Create a new lock wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: sync::Mutex::new(value),
        }
    }

    /// Acquire the lock and run `f` with exclusive access.
    ///
    /// A poisoned lock is recovered rather than exposed: a worker panic is
    /// reported at join time, and later races must still be able to run.
    pub fn lock<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}
