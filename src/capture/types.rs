//! Core types for stroke capture
//!
//! Defines the fundamental data structures shared by the capture and
//! analysis layers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in canvas space.
///
/// Has no identity beyond its coordinates: two points with identical
/// coordinate values are the same point for counting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate-value key for deduplication.
    ///
    /// Keys points by the exact bit pattern of each coordinate, matching
    /// value equality for every coordinate a drawing surface produces.
    pub(crate) fn dedup_key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

/// The shape a given exercise asks the user to draw.
///
/// A closed enumeration: the expected label is always supplied by the
/// exercise prompt, never inferred from the stroke itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLabel {
    Circle,
    Rectangle,
    Triangle,
    Line,
}

impl ShapeLabel {
    /// All labels, in prompt order.
    pub const ALL: [ShapeLabel; 4] = [
        ShapeLabel::Circle,
        ShapeLabel::Rectangle,
        ShapeLabel::Triangle,
        ShapeLabel::Line,
    ];

    /// Lowercase name used by the CLI and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Circle => "circle",
            ShapeLabel::Rectangle => "rectangle",
            ShapeLabel::Triangle => "triangle",
            ShapeLabel::Line => "line",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeLabel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeLabel::Circle),
            "rectangle" => Ok(ShapeLabel::Rectangle),
            "triangle" => Ok(ShapeLabel::Triangle),
            "line" => Ok(ShapeLabel::Line),
            other => Err(crate::Error::Capture(format!(
                "unknown shape label: {other:?} (expected circle, rectangle, triangle, or line)"
            ))),
        }
    }
}

/// One continuous freehand path, finalized for evaluation.
///
/// A stroke is immutable once built: the capture layer finalizes it via
/// [`crate::capture::builder::StrokeBuilder`] at pen-up, and the classifier
/// only ever reads it. Point order is the capture order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Build a stroke directly from a point sequence.
    ///
    /// Intended for tests and for callers that already hold a finalized
    /// sequence; interactive capture goes through `StrokeBuilder`.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The captured points, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of raw points (duplicates included).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// An empty stroke never matches any shape.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
