//! Stroke analysis
//!
//! The decision core: bounding-box geometry, per-shape match predicates, and
//! the anti-automation timing gate. Everything here is a pure function of its
//! inputs; there is no internal state, no I/O, and no panic path. Malformed
//! input (empty stroke, degenerate bounding box, missing elapsed time) fails
//! closed rather than raising.

pub mod bounding_box;
pub mod classifier;
pub mod timing_gate;

pub use bounding_box::BoundingBox;
pub use classifier::{classify, classify_stroke};
pub use timing_gate::{evaluate_timing, GateVerdict, MIN_HUMAN_DRAW_SECS};
