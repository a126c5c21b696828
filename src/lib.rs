//! # Sketch Judge
//!
//! A freehand stroke shape classifier with an anti-automation timing gate.
//!
//! ## Overview
//!
//! An interactive drawing exercise asks the user to draw one of a fixed set of
//! shapes (circle, rectangle, triangle, line) on a canvas. This library is the
//! decision core: given the completed stroke's point sequence and the expected
//! shape label, it decides whether the drawing matches, and it rejects attempts
//! drawn implausibly fast for a human hand.
//!
//! The surrounding UI (canvas rendering, tool palettes, prompt screens) is an
//! external collaborator. It produces a timestamped sequence of 2D points for
//! one freehand stroke, supplies the expected shape label, and consumes a
//! boolean verdict plus a rejection reason.
//!
//! ## Quick Start
//!
//! ```
//! use sketch_judge::exercise::session::ExerciseSession;
//! use sketch_judge::capture::types::{Point, ShapeLabel};
//!
//! let mut session = ExerciseSession::new(ShapeLabel::Line);
//! session.begin_drawing();
//!
//! session.begin_stroke();
//! session.push_point(Point::new(0.0, 0.0));
//! session.push_point(Point::new(120.0, 40.0));
//! session.end_stroke();
//!
//! let evaluation = session.submit();
//! // A freshly-started session is always too fast for the timing gate.
//! assert!(!evaluation.passed());
//! ```
//!
//! ## Architecture
//!
//! - [`capture`]: stroke data model and append-only point accumulation
//! - [`time`]: monotonic drawing clock with fail-closed elapsed time
//! - [`analysis`]: bounding-box geometry, shape predicates, timing gate
//! - [`exercise`]: per-exercise session state and prompt selection
//! - [`app`]: CLI and configuration management
//!
//! ## Evaluation Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌──────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Pen Events │───▶│StrokeBuilder │───▶│ Timing Gate │───▶│ Classifier  │
//! │  (external) │    │ (append-only)│    │  (> 1.3 s)  │    │ (per shape) │
//! └─────────────┘    └──────────────┘    └─────────────┘    └─────────────┘
//! ```

pub mod time;
pub mod capture;
pub mod analysis;
pub mod exercise;
pub mod app;

// Re-export commonly used types
pub use analysis::classifier::{classify, classify_stroke};
pub use analysis::timing_gate::{evaluate_timing, GateVerdict};
pub use capture::builder::StrokeBuilder;
pub use capture::types::{Point, ShapeLabel, Stroke};
pub use exercise::session::{Evaluation, ExerciseSession, RejectReason};

/// Result type alias for sketch-judge
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sketch-judge
///
/// The decision core itself never errors: every gate and classifier call
/// returns a definite value and fails closed on malformed input. Errors here
/// cover the ambient surfaces only (configuration, stroke files, I/O).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Stroke capture error: {0}")]
    Capture(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
