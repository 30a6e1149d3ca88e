//! Frame timing and pacing.
//!
//! [`FrameClock`] is the tick source for the frame loop: it measures the time
//! between frames, clamps long stalls, and sleeps until the next frame is due.
//!
//! # Example
//!
//! ```ignore
//! use mouse_trails::time::FrameClock;
//!
//! let mut clock = FrameClock::new(Duration::from_millis(16));
//!
//! loop {
//!     let dt = clock.tick();
//!     sim.tick(pointer, dt);
//!     clock.pace();
//! }
//! ```
//!
//! For reproducible headless runs, [`FrameClock::with_fixed_delta`] makes
//! every tick report the same delta regardless of wall time.

use std::time::{Duration, Instant};

/// Longest delta a single tick may report, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Default frame interval, about 60 Hz.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// Frame timer with delta clamping and fixed-interval pacing.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created or last reset.
    start: Instant,
    /// When the last tick occurred.
    last_frame: Instant,
    /// Target time between frames.
    interval: Duration,
    /// When the next frame is due.
    deadline: Instant,
    /// Total elapsed time in seconds, excluding pauses.
    elapsed_secs: f32,
    /// Delta reported by the last tick.
    delta_secs: f32,
    /// Upper bound on reported delta.
    max_delta: f32,
    /// Fixed delta for deterministic runs.
    fixed_delta: Option<f32>,
    /// Ticks since start.
    frame_count: u64,
    paused: bool,
    /// Time spent paused, removed from `elapsed`.
    pause_elapsed: Duration,
}

impl FrameClock {
    /// A clock that paces frames `interval` apart.
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            interval,
            deadline: now + interval,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            max_delta: DEFAULT_MAX_DELTA,
            fixed_delta: None,
            frame_count: 0,
            paused: false,
            pause_elapsed: Duration::ZERO,
        }
    }

    /// A clock whose every tick reports `delta` seconds.
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.fixed_delta = Some(delta.max(0.0));
        self
    }

    /// Cap the delta a single tick may report.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Advance one frame and return its delta in seconds.
    ///
    /// Returns 0 while paused. Real deltas are clamped to the max delta; a
    /// fixed delta is reported as is.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return 0.0;
        }

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = match self.fixed_delta {
            Some(fixed) => fixed,
            None => raw_delta.min(self.max_delta),
        };
        self.last_frame = now;

        self.elapsed_secs = match self.fixed_delta {
            Some(fixed) => fixed * (self.frame_count + 1) as f32,
            None => (now.duration_since(self.start).saturating_sub(self.pause_elapsed)).as_secs_f32(),
        };
        self.frame_count += 1;

        self.delta_secs
    }

    /// Sleep until the next frame is due.
    ///
    /// Deadlines advance by the interval each call. If the loop has fallen
    /// more than a frame behind, the schedule restarts from now instead of
    /// bursting to catch up.
    pub fn pace(&mut self) {
        let wait = self.until_next_frame();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.schedule_next();
    }

    /// Move the deadline one interval on without sleeping. For event loops
    /// that wait on [`deadline`](Self::deadline) themselves.
    pub fn schedule_next(&mut self) {
        let now = Instant::now();
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
    }

    /// When the next frame is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time until the next frame is due, zero if already late.
    pub fn until_next_frame(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Total elapsed time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Delta reported by the last tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop time. Ticks report 0 until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.deadline = now + self.interval;
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Restart from zero, keeping the interval and delta settings.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_frame = now;
        self.deadline = now + self.interval;
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
        self.pause_elapsed = Duration::ZERO;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::default();
        assert_eq!(clock.frame(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_tick_measures_time() {
        let mut clock = FrameClock::default();
        thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();
        assert!(dt > 0.0);
        assert!(clock.elapsed() > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut clock = FrameClock::default().with_max_delta(0.005);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), 0.005);
    }

    #[test]
    fn test_pause_reports_zero() {
        let mut clock = FrameClock::default();
        clock.tick();
        clock.pause();
        let elapsed = clock.elapsed();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.elapsed(), elapsed);

        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fixed_delta() {
        let mut clock = FrameClock::default().with_fixed_delta(1.0 / 60.0);
        thread::sleep(Duration::from_millis(50));
        let dt = clock.tick();
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
        clock.tick();
        assert!((clock.elapsed() - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_pace_waits_for_deadline() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let before = Instant::now();
        clock.pace();
        clock.pace();
        assert!(before.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn test_schedule_next_resyncs_when_late() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(20));
        assert!(clock.until_next_frame().is_zero());
        clock.schedule_next();
        assert!(clock.deadline() > Instant::now());
        assert!(clock.until_next_frame() <= Duration::from_millis(5));
    }

    #[test]
    fn test_reset_restarts_counters() {
        let mut clock = FrameClock::default().with_fixed_delta(0.5);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame(), 2);
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);

        clock.reset();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.delta(), 0.0);

        // The fixed delta survives a reset.
        assert_eq!(clock.tick(), 0.5);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }
}
