//! 2D line segment type.

use super::{Line2, Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Contour edges are stored as segments; two edges are the same edge when
/// their endpoints compare exactly equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the unit direction, or the zero vector for a degenerate segment.
    #[inline]
    pub fn unit_direction(self) -> Vec2<F> {
        self.direction().normalize_or_zero()
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the infinite line supporting this segment.
    #[inline]
    pub fn to_line(self) -> Line2<F> {
        Line2::from_segment(&self)
    }

    /// Computes the distance from a point to the nearest point of this
    /// segment.
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return p.distance(self.start);
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        p.distance(self.start + v * t)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_and_length() {
        let s: Segment2<f64> = Segment2::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_relative_eq!(s.unit_direction().x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_unit_direction() {
        let p = Point2::new(2.0_f64, 2.0);
        assert!(Segment2::new(p, p).unit_direction().is_zero());
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert_eq!(s.distance_to_point(Point2::new(2.0, 3.0)), 3.0);
        // Past the end the distance is to the endpoint.
        assert_eq!(s.distance_to_point(Point2::new(7.0, 4.0)), 5.0);
        assert_eq!(s.distance_to_point(Point2::new(-3.0, -4.0)), 5.0);

        let p = Point2::new(1.0, 1.0);
        assert_eq!(Segment2::new(p, p).distance_to_point(Point2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_reversed() {
        let s: Segment2<f64> = Segment2::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0));
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert_eq!(r.reversed(), s);
    }
}
