//! Polygon type and winding helpers used to prepare skeleton input.

mod core;

pub use core::{polygon_area, polygon_contains, polygon_is_convex, polygon_signed_area, Polygon};
