//! Stroke capture
//!
//! Data model for freehand strokes and the append-only builder that
//! accumulates points as input events arrive from the drawing surface.

pub mod builder;
pub mod types;

pub use builder::StrokeBuilder;
pub use types::{Point, ShapeLabel, Stroke};
