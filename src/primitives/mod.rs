//! Floating-point 2D primitives used by the skeleton simulation.

mod line2;
mod point2;
mod ray2;
mod segment2;
mod vec2;

pub use line2::Line2;
pub use point2::Point2;
pub use ray2::Ray2;
pub use segment2::Segment2;
pub use vec2::Vec2;
