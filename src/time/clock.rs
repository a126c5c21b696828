//! Monotonic Drawing Clock
//!
//! Measures the wall-clock duration between the first pen-down and submission.
//! Both endpoints come from the same monotonic clock source (`Instant`), so
//! the elapsed value can never go backward across a system clock adjustment.

use std::time::Instant;

/// Clock for one drawing attempt.
///
/// Created unstarted; `start()` stamps the moment drawing begins. If the
/// stamp is missing at read time, the elapsed duration reads as zero so that
/// the timing gate fails closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawClock {
    started_at: Option<Instant>,
}

impl DrawClock {
    /// Create an unstarted clock.
    pub fn new() -> Self {
        Self { started_at: None }
    }

    /// Stamp the drawing start time. Subsequent calls are ignored: the clock
    /// measures from the first pen-down of the attempt.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Whether a start timestamp has been captured.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Elapsed seconds since the start stamp.
    ///
    /// Returns 0.0 when the clock was never started, which makes the timing
    /// gate reject the attempt (fail closed).
    pub fn elapsed_secs(&self) -> f64 {
        match self.started_at {
            Some(start) => start.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unstarted_clock_reads_zero() {
        let clock = DrawClock::new();
        assert!(!clock.is_started());
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_started_clock_advances() {
        let mut clock = DrawClock::new();
        clock.start();
        assert!(clock.is_started());

        std::thread::sleep(Duration::from_millis(10));
        assert!(clock.elapsed_secs() >= 0.010);
    }

    #[test]
    fn test_restart_is_ignored() {
        let mut clock = DrawClock::new();
        clock.start();
        std::thread::sleep(Duration::from_millis(10));

        // A second start must not reset the measurement window.
        clock.start();
        assert!(clock.elapsed_secs() >= 0.010);
    }

    #[test]
    fn test_default_is_unstarted() {
        let clock = DrawClock::default();
        assert!(!clock.is_started());
    }
}
