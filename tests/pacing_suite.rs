use std::time::{Duration, Instant};

use noise_matrix::pacing::{Clock, FrameLimiter, SystemClock};

/// Time only moves when the limiter sleeps or the test says so.
struct FakeClock {
    now: Instant,
    sleeps: Vec<Duration>,
    /// Fraction of each requested sleep that actually elapses.
    sleep_ratio: f64,
}

impl FakeClock {
    fn new() -> Self {
        Self {
            now: Instant::now(),
            sleeps: Vec::new(),
            sleep_ratio: 1.0,
        }
    }

    fn work(&mut self, d: Duration) {
        self.now += d;
    }
}

impl Clock for FakeClock {
    fn now(&mut self) -> Instant {
        self.now
    }

    fn sleep(&mut self, d: Duration) {
        self.sleeps.push(d);
        let actual = d.mul_f64(self.sleep_ratio).max(Duration::from_micros(1));
        self.now += actual;
    }
}

#[test]
fn interval_is_integer_microseconds_per_frame() {
    assert_eq!(FrameLimiter::new(120).min_interval(), Duration::from_micros(8_333));
    assert_eq!(FrameLimiter::new(60).min_interval(), Duration::from_micros(16_666));
    assert_eq!(FrameLimiter::default().min_interval(), Duration::from_micros(8_333));
}

#[test]
fn first_cycle_starts_immediately() {
    let mut clock = FakeClock::new();
    let t0 = clock.now;
    let mut lim = FrameLimiter::new(120);
    assert_eq!(lim.wait(&mut clock), t0);
    assert!(clock.sleeps.is_empty());
}

#[test]
fn fast_frames_are_held_to_the_minimum_interval() {
    let mut clock = FakeClock::new();
    let mut lim = FrameLimiter::new(120);
    let mut starts = vec![lim.wait(&mut clock)];
    for _ in 0..20 {
        clock.work(Duration::from_micros(500));
        starts.push(lim.wait(&mut clock));
    }
    for pair in starts.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::from_micros(8_333));
    }
}

#[test]
fn slow_frames_do_not_catch_up() {
    let mut clock = FakeClock::new();
    let mut lim = FrameLimiter::new(120);
    let t0 = lim.wait(&mut clock);

    clock.work(Duration::from_millis(50));
    let t1 = lim.wait(&mut clock);
    assert_eq!(t1 - t0, Duration::from_millis(50));
    assert!(clock.sleeps.is_empty());

    clock.work(Duration::from_micros(100));
    let t2 = lim.wait(&mut clock);
    assert_eq!(t2 - t1, Duration::from_micros(8_333));
}

#[test]
fn short_sleeps_are_topped_up() {
    let mut clock = FakeClock::new();
    clock.sleep_ratio = 0.4;
    let mut lim = FrameLimiter::new(120);
    let t0 = lim.wait(&mut clock);
    let t1 = lim.wait(&mut clock);
    assert!(t1 - t0 >= Duration::from_micros(8_333));
    assert!(clock.sleeps.len() > 1);
}

#[test]
fn real_clock_cadence_respects_max_fps() {
    let mut clock = SystemClock;
    let mut lim = FrameLimiter::new(120);
    let mut prev = lim.wait(&mut clock);
    let mut min_gap = Duration::MAX;
    for _ in 0..12 {
        let t = lim.wait(&mut clock);
        min_gap = min_gap.min(t - prev);
        prev = t;
    }
    assert!(min_gap >= Duration::from_micros(1_000_000 / 120), "min gap {min_gap:?}");
}
