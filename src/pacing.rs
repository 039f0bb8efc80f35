use std::time::{Duration, Instant};

pub const DEFAULT_MAX_FPS: u32 = 120;

pub trait Clock {
    fn now(&mut self) -> Instant;
    fn sleep(&mut self, d: Duration);
}

/// Monotonic wall clock backed by `Instant` and `thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Gates each cycle to start no sooner than `1_000_000 / max_fps` µs after
/// the previous one. The next deadline is measured from the actual wake time,
/// so a slow frame never causes a burst of catch-up frames.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
    min_interval: Duration,
    last_start: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(max_fps: u32) -> Self {
        Self {
            min_interval: Duration::from_micros(1_000_000 / max_fps.max(1) as u64),
            last_start: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Blocks until the cycle may begin and returns its start timestamp.
    pub fn wait<C: Clock + ?Sized>(&mut self, clock: &mut C) -> Instant {
        let mut now = clock.now();
        if let Some(last) = self.last_start {
            let deadline = last + self.min_interval;
            // Re-read after every sleep; a short wake just sleeps again.
            while now < deadline {
                clock.sleep(deadline - now);
                now = clock.now();
            }
        }
        self.last_start = Some(now);
        now
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FPS)
    }
}

/// Frames per second over a rolling one-second window.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    last: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            frames: 0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        if dt >= 1.0 {
            self.fps = (self.frames as f32) / dt;
            self.frames = 0;
            self.last = now;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
