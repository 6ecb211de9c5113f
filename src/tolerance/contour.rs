//! Contour cleanup ahead of skeleton construction.
//!
//! A contour is a closed ring of points: the last point connects back to the
//! first. Bisectors are only well defined where the two incident edges have
//! length and turn, so [`normalize_contour`] removes repeated points and
//! vertices that sit on a straight run.
//!
//! # Example
//!
//! ```
//! use skeletum::tolerance::normalize_contour;
//! use skeletum::Point2;
//!
//! let ring = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),   // on the bottom edge
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 2.0),   // repeated
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let clean = normalize_contour(&ring);
//! assert_eq!(clean.len(), 4);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Removes repeated and straight-run vertices from a closed contour.
///
/// A point is dropped when it equals its successor, or when the unit
/// direction of its incoming edge equals the unit direction of its outgoing
/// edge. Both tests are exact: nearly-collinear vertices are kept.
///
/// Removal can expose a new straight run (a repeated point in the middle of
/// a line), so the filter is applied until the contour stops changing. The
/// result is therefore a fixed point: normalizing it again returns it
/// unchanged.
///
/// The result may have fewer than 3 points; checking that is up to the
/// caller.
pub fn normalize_contour<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut current = points.to_vec();

    loop {
        let n = current.len();
        let kept: Vec<Point2<F>> = (0..n)
            .filter(|&i| !is_redundant(&current, i))
            .map(|i| current[i])
            .collect();

        if kept.len() == n {
            return kept;
        }
        current = kept;
    }
}

/// Returns `true` if vertex `i` of the ring adds nothing to its shape.
fn is_redundant<F: Float>(ring: &[Point2<F>], i: usize) -> bool {
    let n = ring.len();
    let prev = ring[(i + n - 1) % n];
    let point = ring[i];
    let next = ring[(i + 1) % n];

    if point == next {
        return true;
    }

    match ((point - prev).normalize(), (next - point).normalize()) {
        (Some(incoming), Some(outgoing)) => incoming == outgoing,
        _ => false,
    }
}
