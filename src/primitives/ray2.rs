//! 2D ray type.

use super::{Line2, Point2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// The direction is stored as-is (not necessarily normalized). Vertex
/// bisectors in the skeleton are rays.
///
/// # Example
///
/// ```
/// use skeletum::primitives::{Point2, Ray2, Vec2};
///
/// let a: Ray2<f64> = Ray2::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
/// let b = Ray2::new(Point2::new(2.0, 0.0), Vec2::new(-1.0, 1.0));
///
/// let (hit, _, _) = a.intersect_ray(&b).unwrap();
/// assert_eq!(hit, Point2::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Returns the infinite line supporting this ray.
    #[inline]
    pub fn to_line(&self) -> Line2<F> {
        Line2::new(self.origin, self.direction)
    }

    /// Intersects this ray with another ray.
    ///
    /// Returns `Some((point, t_self, t_other))` if they intersect at a single
    /// point where both parameters are >= 0.
    ///
    /// Returns `None` if the rays are parallel or the crossing lies behind
    /// either origin.
    #[inline]
    pub fn intersect_ray(&self, other: &Ray2<F>) -> Option<(Point2<F>, F, F)> {
        self.intersect_ray_within(other, F::zero())
    }

    /// Intersects this ray with another ray, accepting crossings up to
    /// `slack` (a distance) behind either origin.
    ///
    /// Rays are parallel when the cross product of their directions is
    /// within rounding of zero relative to the direction lengths.
    pub fn intersect_ray_within(&self, other: &Ray2<F>, slack: F) -> Option<(Point2<F>, F, F)> {
        let self_len = self.direction.magnitude();
        let other_len = other.direction.magnitude();
        let cross = self.direction.cross(other.direction);

        if cross.abs() <= F::epsilon() * self_len * other_len {
            return None;
        }

        let delta = other.origin - self.origin;
        let t_self = delta.cross(other.direction) / cross;
        let t_other = delta.cross(self.direction) / cross;

        if t_self * self_len >= -slack && t_other * other_len >= -slack {
            Some((self.point_at(t_self), t_self, t_other))
        } else {
            None
        }
    }
}
