//! Collaborators consumed by the loop and the screen machine.
//!
//! The core never talks to raylib directly. It reads time through [`Clock`]
//! and learns about close requests through [`EventSource`]; the desktop
//! context in [`desktop`] implements both on top of raylib, and tests provide
//! scripted versions.

pub mod desktop;

use std::time::{Duration, Instant};

/// Monotonic millisecond clock plus a best-effort sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Sleep for at least `ms` milliseconds. May oversleep.
    fn sleep(&self, ms: u64);
}

/// Source of window/OS events consulted once per simulation step.
pub trait EventSource {
    /// Pump pending input and window events and report whether the user or
    /// the OS asked the application to terminate.
    fn poll_close_requested(&mut self) -> bool;
}

/// Wall clock backed by [`Instant`], measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        clock.sleep(2);
        let b = clock.now_ms();
        assert!(b >= a + 2);
    }
}
