//! Append-only stroke builder
//!
//! Accumulates points one input event at a time while the pen is down, then
//! hands an immutable [`Stroke`] to the classifier at pen-up. Exclusive
//! mutation during the append phase is enforced by `&mut self`; the drawing
//! surface delivers events serially, so no synchronization is needed.

use crate::capture::types::{Point, Stroke};

/// Builder for one in-progress stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    points: Vec<Point>,
}

impl StrokeBuilder {
    /// Create an empty builder for a new stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append one captured point. Points arrive in drawing order and are
    /// never reordered or dropped.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points accumulated so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finalize the stroke, consuming the builder.
    ///
    /// The returned stroke is read-only input to the classifier; appending
    /// after submission is impossible by construction.
    pub fn finalize(self) -> Stroke {
        Stroke::from_points(self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_in_order() {
        let mut builder = StrokeBuilder::new();
        builder.push(Point::new(0.0, 0.0));
        builder.push(Point::new(1.0, 2.0));
        builder.push(Point::new(3.0, 4.0));

        assert_eq!(builder.len(), 3);
        let stroke = builder.finalize();
        assert_eq!(stroke.points()[0], Point::new(0.0, 0.0));
        assert_eq!(stroke.points()[2], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_empty_builder_finalizes_to_empty_stroke() {
        let builder = StrokeBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.finalize().is_empty());
    }

    #[test]
    fn test_duplicate_points_are_kept() {
        let mut builder = StrokeBuilder::new();
        builder.push(Point::new(5.0, 5.0));
        builder.push(Point::new(5.0, 5.0));

        // Raw capture keeps duplicates; deduplication is a classifier concern.
        assert_eq!(builder.finalize().len(), 2);
    }
}
