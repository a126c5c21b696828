//! Exercise Session
//!
//! Explicit, exclusively-owned state for one drawing exercise: the expected
//! shape, the strokes captured so far, the in-progress stroke builder, and
//! the drawing clock. Constructed fresh per exercise and discarded after one
//! evaluation cycle; there is no ambient global state.

use crate::analysis::classifier::classify;
use crate::analysis::timing_gate::{evaluate_timing, GateVerdict};
use crate::capture::builder::StrokeBuilder;
use crate::capture::types::{Point, ShapeLabel, Stroke};
use crate::time::clock::DrawClock;
use tracing::{debug, info};
use uuid::Uuid;

/// Why an attempt was rejected.
///
/// The core produces the variant only; mapping to user-visible message text
/// is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The timing gate rejected the attempt (drawn implausibly fast).
    TooFast,
    /// The stroke did not match the expected shape.
    ShapeMismatch,
}

/// Combined verdict of one evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Timing gate verdict. Evaluated first.
    pub timing: GateVerdict,
    /// Classifier verdict. Always false when the gate rejects, because
    /// classification is skipped entirely in that case.
    pub shape_match: bool,
}

impl Evaluation {
    /// The attempt passes iff the gate accepted and the shape matched.
    pub fn passed(&self) -> bool {
        self.timing.is_accept() && self.shape_match
    }

    /// The rejection reason, if the attempt failed. Timing wins over shape:
    /// a too-fast attempt is reported as such even though the shape was
    /// never inspected.
    pub fn rejection(&self) -> Option<RejectReason> {
        if !self.timing.is_accept() {
            Some(RejectReason::TooFast)
        } else if !self.shape_match {
            Some(RejectReason::ShapeMismatch)
        } else {
            None
        }
    }
}

/// State for one drawing exercise attempt.
#[derive(Debug)]
pub struct ExerciseSession {
    /// Unique session ID.
    id: Uuid,
    /// The shape this exercise asks for. Supplied by the prompt generator,
    /// never inferred from the drawing.
    expected: ShapeLabel,
    /// Completed strokes, in pen-down order.
    strokes: Vec<Stroke>,
    /// Stroke currently being drawn, if the pen is down.
    in_progress: Option<StrokeBuilder>,
    /// Clock started at the first pen-down.
    clock: DrawClock,
}

impl ExerciseSession {
    /// Create a fresh session for one exercise. The clock does not start
    /// until [`begin_drawing`](Self::begin_drawing).
    pub fn new(expected: ShapeLabel) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, shape = %expected, "exercise session created");
        Self {
            id,
            expected,
            strokes: Vec::new(),
            in_progress: None,
            clock: DrawClock::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn expected_shape(&self) -> ShapeLabel {
        self.expected
    }

    /// Stamp the drawing start time. Idempotent; the UI calls this when the
    /// canvas first receives input.
    pub fn begin_drawing(&mut self) {
        self.clock.start();
    }

    /// Start a new stroke (pen down). Also stamps the drawing clock, so a
    /// caller that only forwards pen events still gets a start timestamp.
    pub fn begin_stroke(&mut self) {
        self.clock.start();
        if self.in_progress.is_none() {
            self.in_progress = Some(StrokeBuilder::new());
        }
    }

    /// Append a point to the in-progress stroke. Ignored when no stroke has
    /// been started; the drawing surface delivers events serially, so there
    /// is exactly one writer.
    pub fn push_point(&mut self, point: Point) {
        if let Some(builder) = self.in_progress.as_mut() {
            builder.push(point);
        }
    }

    /// Finish the in-progress stroke (pen up). A pen-up without any captured
    /// points discards the stroke rather than recording an empty one.
    pub fn end_stroke(&mut self) {
        if let Some(builder) = self.in_progress.take() {
            if !builder.is_empty() {
                self.strokes.push(builder.finalize());
            }
        }
    }

    /// Completed strokes so far.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Submit the drawing for evaluation, consuming nothing but ending the
    /// capture phase: an unfinished stroke is finalized first.
    ///
    /// The timing gate runs before classification; when it rejects, the
    /// classifier is not invoked at all.
    pub fn submit(&mut self) -> Evaluation {
        self.end_stroke();

        let elapsed = self.clock.elapsed_secs();
        let timing = evaluate_timing(elapsed);

        let shape_match = if timing.is_accept() {
            classify(&self.strokes, self.expected)
        } else {
            false
        };

        let evaluation = Evaluation { timing, shape_match };
        info!(
            session = %self.id,
            shape = %self.expected,
            elapsed_secs = elapsed,
            strokes = self.strokes.len(),
            passed = evaluation.passed(),
            "attempt evaluated"
        );
        evaluation
    }
}
