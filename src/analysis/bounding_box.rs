//! Axis-Aligned Bounding Box
//!
//! The smallest axis-aligned rectangle containing all points of a stroke.
//! Derived on demand with a single linear scan, never stored.

use crate::capture::types::Point;

/// Bounding box of a non-empty point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a point sequence.
    ///
    /// Returns `None` for an empty sequence: the box is undefined and must
    /// not be computed in that case.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        for point in &points[1..] {
            if point.x < bbox.min_x {
                bbox.min_x = point.x;
            }
            if point.x > bbox.max_x {
                bbox.max_x = point.x;
            }
            if point.y < bbox.min_y {
                bbox.min_y = point.y;
            }
            if point.y > bbox.max_y {
                bbox.max_y = point.y;
            }
        }

        Some(bbox)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Covered area in squared canvas units.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Width divided by height.
    ///
    /// Returns `None` unless the height is strictly positive, so a degenerate
    /// (horizontal-line) stroke never yields an infinite or NaN ratio.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let height = self.height();
        if height > 0.0 {
            Some(self.width() / height)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_have_no_bbox() {
        assert!(BoundingBox::of(&[]).is_none());
    }

    #[test]
    fn test_single_point_bbox_is_degenerate() {
        let bbox = BoundingBox::of(&[Point::new(4.0, 9.0)]).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.area(), 0.0);
        assert!(bbox.aspect_ratio().is_none());
    }

    #[test]
    fn test_bbox_extents() {
        let points = [
            Point::new(10.0, 50.0),
            Point::new(-3.0, 20.0),
            Point::new(7.0, 80.0),
            Point::new(2.0, 35.0),
        ];
        let bbox = BoundingBox::of(&points).unwrap();

        assert_eq!(bbox.min_x, -3.0);
        assert_eq!(bbox.max_x, 10.0);
        assert_eq!(bbox.min_y, 20.0);
        assert_eq!(bbox.max_y, 80.0);
        assert_eq!(bbox.width(), 13.0);
        assert_eq!(bbox.height(), 60.0);
    }

    #[test]
    fn test_aspect_ratio() {
        let points = [Point::new(0.0, 0.0), Point::new(200.0, 100.0)];
        let bbox = BoundingBox::of(&points).unwrap();
        assert_eq!(bbox.aspect_ratio(), Some(2.0));
        assert_eq!(bbox.area(), 20_000.0);
    }

    #[test]
    fn test_horizontal_stroke_has_no_aspect_ratio() {
        // All points on one horizontal line: height is zero.
        let points = [Point::new(0.0, 5.0), Point::new(100.0, 5.0)];
        let bbox = BoundingBox::of(&points).unwrap();
        assert_eq!(bbox.height(), 0.0);
        assert!(bbox.aspect_ratio().is_none());
    }
}
