/// Fixed-rate frame limiter — the only place the game loop blocks.

use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 50;

pub struct FrameClock {
    period: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// `fps` must be at least 1.
    pub fn new(fps: u32) -> Self {
        FrameClock {
            period: Duration::from_secs(1) / fps,
            last_tick: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep out the rest of the current frame.  An overrunning frame
    /// continues immediately instead of trying to catch up.
    pub fn wait_next_tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.period {
            thread::sleep(self.period - elapsed);
        }
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}
