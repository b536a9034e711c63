//! Monotonic time source.

use std::time::Instant;

/// A monotonic clock read by the frame rate gate.
///
/// Hosts normally keep the default [`SystemClock`]; a hand-driven clock makes
/// redraw timing deterministic in tests.
pub trait Clock: Send {
    /// Current reading of the clock.
    fn now(&self) -> Instant;
}

/// The operating system's monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
