//! Epsilon-aware predicates and contour cleanup.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod contour;
mod predicates;

pub use contour::normalize_contour;
pub use predicates::{approx_equal, approx_same, cross, side_of};
