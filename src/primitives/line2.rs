//! 2D infinite line type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use skeletum::primitives::{Line2, Point2, Vec2};
///
/// // Horizontal line through y=1
/// let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
/// assert_eq!(line.signed_distance(Point2::new(5.0, 3.0)), 2.0);
/// assert_eq!(line.distance(Point2::new(5.0, -1.0)), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Creates a line from a segment (extending it infinitely).
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self::new(segment.start, segment.direction())
    }

    /// Returns the point on the line at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Intersects this line with another line.
    ///
    /// Returns `Some((point, t_self, t_other))`, or `None` if the lines are
    /// parallel or either direction is degenerate. The parallel test is
    /// relative to the direction lengths.
    pub fn intersect_line(&self, other: &Line2<F>) -> Option<(Point2<F>, F, F)> {
        let cross = self.direction.cross(other.direction);
        let scale = self.direction.magnitude() * other.direction.magnitude();

        if cross.abs() <= F::epsilon() * scale {
            return None;
        }

        let delta = other.origin - self.origin;
        let t_self = delta.cross(other.direction) / cross;
        let t_other = delta.cross(self.direction) / cross;

        Some((self.point_at(t_self), t_self, t_other))
    }

    /// Returns the signed perpendicular distance from a point to the line.
    ///
    /// Positive to the left of the direction vector. A degenerate line
    /// reports the distance to its origin.
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        let to_point = point - self.origin;
        match self.direction.normalize() {
            Some(unit) => unit.cross(to_point),
            None => to_point.magnitude(),
        }
    }

    /// Returns the unsigned perpendicular distance from a point to the line.
    #[inline]
    pub fn distance(&self, point: Point2<F>) -> F {
        self.signed_distance(point).abs()
    }
}
