//! The slideshow scheduler — an owned, pausable interval timer.
//!
//! Rather than holding a real OS/runtime timer, the scheduler is a pure
//! accumulator driven by whoever owns the event loop: feed it elapsed
//! wall time and it reports how many slide intervals fired. That makes
//! it trivially virtual-clock testable, and teardown is just dropping
//! the value — no dangling ticks, no duplicate timers.

use std::time::Duration;

/// Repeating slide timer. Armed on creation.
///
/// Exactly one logical timer exists at any moment: re-arming via
/// [`set_interval`](Self::set_interval) resets the accumulator instead
/// of stacking a second timer, and [`disarm`](Self::disarm) drops any
/// partial interval so a later [`arm`](Self::arm) starts fresh.
#[derive(Debug, Clone)]
pub struct Slideshow {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl Slideshow {
    /// Minimum accepted interval. A zero interval would fire unboundedly.
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Self::MIN_INTERVAL),
            elapsed: Duration::ZERO,
            armed: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed elapsed time; returns how many whole intervals fired.
    /// The remainder carries over to the next call. Disarmed schedulers
    /// always report zero.
    pub fn on_elapsed(&mut self, dt: Duration) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0u32;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Change the slide interval. Resets the partial interval (re-arm
    /// semantics) but leaves the armed/disarmed state alone.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Self::MIN_INTERVAL);
        self.elapsed = Duration::ZERO;
    }

    /// Resume ticking. The first slide fires a full interval from now.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stop ticking and drop any accumulated partial interval.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_per_interval() {
        let mut s = Slideshow::new(7000 * MS);
        assert_eq!(s.on_elapsed(6999 * MS), 0);
        assert_eq!(s.on_elapsed(MS), 1);
    }

    #[test]
    fn remainder_carries_over() {
        let mut s = Slideshow::new(1000 * MS);
        assert_eq!(s.on_elapsed(1500 * MS), 1);
        assert_eq!(s.on_elapsed(500 * MS), 1);
    }

    #[test]
    fn batches_multiple_missed_intervals() {
        let mut s = Slideshow::new(1000 * MS);
        assert_eq!(s.on_elapsed(3200 * MS), 3);
        assert_eq!(s.on_elapsed(800 * MS), 1);
    }

    #[test]
    fn disarmed_scheduler_reports_nothing() {
        let mut s = Slideshow::new(1000 * MS);
        s.disarm();
        assert_eq!(s.on_elapsed(5000 * MS), 0);
        assert!(!s.is_armed());
    }

    #[test]
    fn disarm_drops_partial_interval() {
        let mut s = Slideshow::new(1000 * MS);
        assert_eq!(s.on_elapsed(900 * MS), 0);
        s.disarm();
        s.arm();
        // Fresh interval after re-arm: the earlier 900ms is gone.
        assert_eq!(s.on_elapsed(900 * MS), 0);
        assert_eq!(s.on_elapsed(100 * MS), 1);
    }

    #[test]
    fn interval_change_rearms_a_single_timer() {
        let mut s = Slideshow::new(1000 * MS);
        assert_eq!(s.on_elapsed(900 * MS), 0);
        s.set_interval(500 * MS);
        // Were a second timer still running, 600ms would fire twice
        // (once for the stale 1000ms timer's remainder, once for the
        // new 500ms one). Exactly one fires.
        assert_eq!(s.on_elapsed(600 * MS), 1);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut s = Slideshow::new(Duration::ZERO);
        assert_eq!(s.interval(), Duration::from_millis(1));
        assert_eq!(s.on_elapsed(3 * MS), 3);
    }
}
