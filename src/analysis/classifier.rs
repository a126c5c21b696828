//! Stroke Shape Classifier
//!
//! Decides whether a finalized stroke visually matches an expected shape
//! label using bounding-box and point-count heuristics. No curve fitting, no
//! machine learning: these are deliberately simple rules with known overlaps
//! (a square-ish bounding box satisfies both the circle and rectangle
//! predicates, and the triangle/line rules accept most multi-point
//! scribbles). The thresholds are fixed policy values and are preserved
//! exactly for compatibility with the exercise's historical behavior.

use crate::analysis::bounding_box::BoundingBox;
use crate::capture::types::{ShapeLabel, Stroke};
use std::collections::HashSet;
use tracing::debug;

/// Tolerance around the accepted aspect ratios.
pub const ASPECT_TOLERANCE: f64 = 0.2;

/// Second aspect ratio the rectangle predicate accepts (a 2:1 box).
pub const RECTANGLE_WIDE_ASPECT: f64 = 2.0;

/// Minimum bounding-box area in squared canvas units.
///
/// Filters out accidental taps and dots that would otherwise satisfy the
/// aspect-ratio checks.
pub const MIN_SHAPE_AREA: f64 = 1000.0;

/// Classify a full drawing against the expected label.
///
/// The evaluable unit is exactly one continuous stroke: a drawing with zero
/// strokes, or with the pen lifted and placed down again, fails closed before
/// any geometry runs, because the shape heuristics assume a single path.
pub fn classify(strokes: &[Stroke], expected: ShapeLabel) -> bool {
    if strokes.len() != 1 {
        debug!(stroke_count = strokes.len(), "expected exactly one stroke");
        return false;
    }
    classify_stroke(&strokes[0], expected)
}

/// Classify a single finalized stroke against the expected label.
///
/// Pure function: identical inputs always yield identical output, and no
/// state persists between calls. An empty stroke is false for every label.
/// Wrong shape and malformed input are not distinguished here; both map to
/// `false`, and the caller owns any user-facing message.
pub fn classify_stroke(stroke: &Stroke, expected: ShapeLabel) -> bool {
    if stroke.is_empty() {
        debug!(shape = %expected, "empty stroke never matches");
        return false;
    }

    let matched = match expected {
        ShapeLabel::Circle => is_approximate_circle(stroke),
        ShapeLabel::Rectangle => is_approximate_rectangle(stroke),
        ShapeLabel::Triangle => is_approximate_triangle(stroke),
        ShapeLabel::Line => is_approximate_line(stroke),
    };

    debug!(shape = %expected, points = stroke.len(), matched, "stroke classified");
    matched
}

/// Circle heuristic: a near-square bounding box of non-trivial area.
///
/// Matches iff `|width/height - 1.0| < 0.2` and `width * height > 1000`.
/// A stroke with zero bounding-box height never matches (the ratio is
/// undefined, not infinite).
pub fn is_approximate_circle(stroke: &Stroke) -> bool {
    let Some(bbox) = BoundingBox::of(stroke.points()) else {
        return false;
    };
    let Some(ratio) = bbox.aspect_ratio() else {
        return false;
    };

    (ratio - 1.0).abs() < ASPECT_TOLERANCE && bbox.area() > MIN_SHAPE_AREA
}

/// Rectangle heuristic: a near-square or near-2:1 bounding box of
/// non-trivial area.
///
/// At aspect ratio ≈ 1.0 this acceptance region is a strict superset of the
/// circle's; the overlap is source behavior and is preserved.
pub fn is_approximate_rectangle(stroke: &Stroke) -> bool {
    let Some(bbox) = BoundingBox::of(stroke.points()) else {
        return false;
    };
    let Some(ratio) = bbox.aspect_ratio() else {
        return false;
    };

    let aspect_ok = (ratio - 1.0).abs() < ASPECT_TOLERANCE
        || (ratio - RECTANGLE_WIDE_ASPECT).abs() < ASPECT_TOLERANCE;
    aspect_ok && bbox.area() > MIN_SHAPE_AREA
}

/// Triangle heuristic: at least three distinct coordinate pairs.
///
/// Duplicates are collapsed by exact coordinate value before counting, so a
/// long stroke that only ever visits two positions still fails.
pub fn is_approximate_triangle(stroke: &Stroke) -> bool {
    distinct_point_count(stroke) >= 3
}

/// Line heuristic: at least two raw points, duplicates included.
///
/// No deduplication and no straightness check.
pub fn is_approximate_line(stroke: &Stroke) -> bool {
    stroke.len() >= 2
}

/// Count distinct coordinate pairs in a stroke (linear scan).
fn distinct_point_count(stroke: &Stroke) -> usize {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(stroke.len());
    for point in stroke.points() {
        seen.insert(point.dedup_key());
    }
    seen.len()
}
