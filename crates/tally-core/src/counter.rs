//! Mutex-guarded shared counter.
//!
//! The counter is the one piece of shared mutable state in the application.
//! Every access goes through the lock; the guard is held only for the
//! read-modify-write itself and never across an `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared signed counter. Starts at zero; may go negative.
#[derive(Debug, Default)]
pub struct Counter {
    value: Mutex<i64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter seeded with an initial value.
    pub fn with_value(value: i64) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Add `amount` and return the post-update value.
    pub fn increase(&self, amount: i64) -> i64 {
        let mut v = self.lock();
        // Wrapping keeps the guarded section panic-free on overflow.
        *v = v.wrapping_add(amount);
        *v
    }

    /// Subtract `amount` and return the post-update value. No floor at zero.
    pub fn decrease(&self, amount: i64) -> i64 {
        let mut v = self.lock();
        *v = v.wrapping_sub(amount);
        *v
    }

    /// Consistent snapshot of the current value.
    pub fn get_value(&self) -> i64 {
        *self.lock()
    }

    // The guarded value is a plain integer and stays valid even if a writer
    // panicked, so poisoning is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, i64> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
