// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic clock abstraction for absolute-interval sampling.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Provides a monotonic `now()` and an absolute `sleep_until()`, so that
/// samplers can hold a fixed cadence regardless of how long the work
/// between sleeps took.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    fn sleep_until(&self, deadline: Instant);
}

/// Real wall-clock sampler clock, backed by `std::time`.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Deterministic clock for tests: `now()` advances only when the test
/// explicitly calls `advance()`; `sleep_until` fast-forwards `now` to the
/// requested deadline without blocking the thread.
#[derive(Clone)]
pub struct FakeClock {
    inner: Arc<Mutex<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sleep_until(&self, deadline: Instant) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if deadline > *guard {
            *guard = deadline;
        }
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
