use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick limiter. A late tick re-anchors the schedule instead of bursting to
/// catch up.
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }

    /// Blocks until the next tick boundary.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_tick > now {
            thread::sleep(self.next_tick - now);
            self.next_tick += self.interval;
        } else {
            self.next_tick = now + self.interval;
        }
    }
}
