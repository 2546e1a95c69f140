//! Frame pacing and monotonic time
//!
//! Scenes never call `Instant::now` or `thread::sleep` directly; they take a
//! [`FrameClock`] so tests run on virtual time. Sleeping between frames is the
//! only suspension point in the whole show.

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic clock plus frame-sleep primitive.
pub trait FrameClock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;

    /// Block until the next frame is due.
    fn wait(&mut self, interval: Duration);
}

/// Real clock: `Instant` for time, `thread::sleep` for pacing.
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for WallClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Virtual clock: `wait` advances time instantly. Lets scene loops run a full
/// 300-second session in microseconds.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time without a frame boundary.
    pub fn advance(&mut self, d: Duration) {
        self.now += d;
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait(&mut self, interval: Duration) {
        self.now += interval;
    }
}
