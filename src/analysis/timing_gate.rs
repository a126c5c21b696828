//! Anti-Automation Timing Gate
//!
//! Rejects submissions made faster than a human plausibly draws. This is a
//! crude bot filter, not a behavioral biometric: a single fixed threshold on
//! the wall-clock duration between stroke start and submission.

/// Minimum plausible human drawing time in seconds.
///
/// Fixed policy constant; deliberately not exposed through configuration.
pub const MIN_HUMAN_DRAW_SECS: f64 = 1.3;

/// Outcome of the timing gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    /// Duration is plausible; classification may proceed.
    Accept,
    /// Drawn too fast (or duration unavailable); classification is skipped.
    Reject,
}

impl GateVerdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, GateVerdict::Accept)
    }
}

/// Evaluate the elapsed drawing duration against the human-speed threshold.
///
/// Rejects when `elapsed_secs` is at or below the threshold (the boundary is
/// inclusive), and fails closed on NaN or negative input: a caller that lost
/// the start timestamp reports zero elapsed and is rejected.
pub fn evaluate_timing(elapsed_secs: f64) -> GateVerdict {
    if elapsed_secs.is_nan() || elapsed_secs <= MIN_HUMAN_DRAW_SECS {
        GateVerdict::Reject
    } else {
        GateVerdict::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_above_threshold() {
        assert_eq!(evaluate_timing(1.301), GateVerdict::Accept);
        assert_eq!(evaluate_timing(2.0), GateVerdict::Accept);
        assert_eq!(evaluate_timing(60.0), GateVerdict::Accept);
    }

    #[test]
    fn test_rejects_at_or_below_threshold() {
        assert_eq!(evaluate_timing(1.3), GateVerdict::Reject);
        assert_eq!(evaluate_timing(1.0), GateVerdict::Reject);
        assert_eq!(evaluate_timing(0.0), GateVerdict::Reject);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert_eq!(evaluate_timing(MIN_HUMAN_DRAW_SECS), GateVerdict::Reject);
        assert_eq!(
            evaluate_timing(MIN_HUMAN_DRAW_SECS + f64::EPSILON * 2.0),
            GateVerdict::Accept
        );
    }

    #[test]
    fn test_fails_closed_on_bad_input() {
        assert_eq!(evaluate_timing(-0.5), GateVerdict::Reject);
        assert_eq!(evaluate_timing(f64::NAN), GateVerdict::Reject);
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(GateVerdict::Accept.is_accept());
        assert!(!GateVerdict::Reject.is_accept());
    }
}
