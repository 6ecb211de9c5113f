//! Scalar and point predicates with explicit tolerance.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Computes the 2D cross product `a.x * b.y - b.x * a.y`.
#[inline]
pub fn cross<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    a.cross(b)
}

/// Tests two scalars for approximate equality.
///
/// Returns `true` if `a == b` exactly, or if their difference is at most
/// `relative` times the larger of the two magnitudes. There is no absolute
/// floor: a non-zero value is never approximately equal to zero.
///
/// # Example
///
/// ```
/// use skeletum::tolerance::approx_equal;
///
/// assert!(approx_equal(1000.0_f64, 1000.5, 0.001));
/// assert!(!approx_equal(1.0_f64, 1.01, 0.001));
/// assert!(!approx_equal(1e-12_f64, 0.0, 0.001));
/// ```
#[inline]
pub fn approx_equal<F: Float>(a: F, b: F, relative: F) -> bool {
    a == b || (a - b).abs() <= a.abs().max(b.abs()) * relative
}

/// Tests two points for approximate equality, coordinate by coordinate.
#[inline]
pub fn approx_same<F: Float>(p: Point2<F>, q: Point2<F>, relative: F) -> bool {
    approx_equal(p.x, q.x, relative) && approx_equal(p.y, q.y, relative)
}

/// Returns the sign-carrying cross product of the unit `direction` and the
/// unit vector from `from` towards `point`.
///
/// Positive when `point` lies counter-clockwise of the directed line, and
/// zero when `point` coincides with `from`. Callers compare the result
/// against a small epsilon instead of zero.
#[inline]
pub fn side_of<F: Float>(direction: Vec2<F>, from: Point2<F>, point: Point2<F>) -> F {
    direction
        .normalize_or_zero()
        .cross((point - from).normalize_or_zero())
}
