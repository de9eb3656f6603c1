//! Periodicity checking for the escape-time loop.
//!
//! The current iterate is compared against a history point that is refreshed
//! on a schedule whose interval doubles over time, so the bookkeeping stays
//! logarithmic in the iteration count.
//! Reference: http://en.wikipedia.org/wiki/User:Simpsons_contributor/periodicity_checking

/// Iterations between history refreshes at the start of an orbit.
pub const INITIAL_CHECK_INTERVAL: u32 = 3;

/// History refreshes between doublings of the check interval.
pub const REFRESHES_PER_DOUBLING: u32 = 10;

/// Default per-axis match distance. Compared with a strict `<`, so only an
/// explicitly configured positive threshold can ever report a cycle.
pub const PERIODICITY_THRESHOLD: f64 = 0.0;

/// Loop-local periodicity state. Lives on the stack of a single evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodicityTracker {
    hx: f64,
    hy: f64,
    check: u32,
    check_counter: u32,
    update_counter: u32,
    threshold: f64,
}

impl PeriodicityTracker {
    /// History starts at the origin, where every orbit begins.
    pub fn new(threshold: f64) -> Self {
        Self {
            hx: 0.0,
            hy: 0.0,
            check: INITIAL_CHECK_INTERVAL,
            check_counter: 0,
            update_counter: 0,
            threshold,
        }
    }

    /// Record the iterate produced by one step of the map.
    ///
    /// Returns `true` when it matches the history point on both axes, in which
    /// case the orbit can never escape.
    #[inline]
    pub fn observe(&mut self, x: f64, y: f64) -> bool {
        if (x - self.hx).abs() < self.threshold && (y - self.hy).abs() < self.threshold {
            return true;
        }

        if self.check_counter == self.check {
            self.check_counter = 0;

            if self.update_counter == REFRESHES_PER_DOUBLING {
                self.update_counter = 0;
                self.check = self.check.saturating_mul(2);
            }
            self.update_counter += 1;

            self.hx = x;
            self.hy = y;
        }
        self.check_counter += 1;

        false
    }

    /// Current number of iterations between history refreshes.
    pub fn check_interval(&self) -> u32 {
        self.check
    }

    pub fn history(&self) -> (f64, f64) {
        (self.hx, self.hy)
    }
}

impl Default for PeriodicityTracker {
    fn default() -> Self {
        Self::new(PERIODICITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe_n(tracker: &mut PeriodicityTracker, n: u32) {
        for i in 0..n {
            // Distinct, non-repeating points.
            let v = f64::from(i) + 1.0;
            assert!(!tracker.observe(v, -v));
        }
    }

    #[test]
    fn first_refresh_after_four_observations() {
        let mut tracker = PeriodicityTracker::default();
        observe_n(&mut tracker, 3);
        assert_eq!(tracker.history(), (0.0, 0.0));
        observe_n(&mut tracker, 1);
        // Fourth observed point is (1.0, -1.0) because observe_n restarts at 1.
        assert_eq!(tracker.history(), (1.0, -1.0));
    }

    #[test]
    fn interval_doubles_on_eleventh_refresh_then_every_tenth() {
        let mut tracker = PeriodicityTracker::default();
        observe_n(&mut tracker, 33);
        assert_eq!(tracker.check_interval(), 3);
        observe_n(&mut tracker, 1);
        assert_eq!(tracker.check_interval(), 6);
        observe_n(&mut tracker, 59);
        assert_eq!(tracker.check_interval(), 6);
        observe_n(&mut tracker, 1);
        assert_eq!(tracker.check_interval(), 12);
    }

    #[test]
    fn default_threshold_never_matches_exact_repeat() {
        let mut tracker = PeriodicityTracker::default();
        for _ in 0..1000 {
            assert!(!tracker.observe(0.0, 0.0));
        }
    }

    #[test]
    fn positive_threshold_matches_history() {
        let mut tracker = PeriodicityTracker::new(1e-12);
        assert!(tracker.observe(0.0, 0.0));
    }

    #[test]
    fn match_requires_both_axes() {
        let mut tracker = PeriodicityTracker::new(1e-12);
        assert!(!tracker.observe(0.0, 0.5));
        assert!(!tracker.observe(0.5, 0.0));
    }

    #[test]
    fn nan_never_matches() {
        let mut tracker = PeriodicityTracker::new(1.0);
        assert!(!tracker.observe(f64::NAN, 0.0));
    }
}
