//! skeletum - Straight skeletons of simple polygons
//!
//! Shrinks a polygon (optionally with holes) at unit speed and records where
//! the wavefront collapses. The result is a list of [`Subtree`]s: each one is
//! a skeleton node (`source`) at some distance from the boundary (`height`)
//! together with the lower nodes and boundary corners that feed into it
//! (`sinks`).
//!
//! # Example
//!
//! ```
//! use skeletum::{skeletonize, Point2};
//!
//! let square = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let skeleton = skeletonize(&square, &[]).unwrap();
//! assert_eq!(skeleton.len(), 1);
//! assert_eq!(skeleton[0].source, Point2::new(0.5, 0.5));
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod skeleton;
pub mod tolerance;

pub use error::SkeletonError;
pub use polygon::Polygon;
pub use primitives::{Line2, Point2, Ray2, Segment2, Vec2};
pub use skeleton::{
    polygon_skeleton, skeletonize, skeletonize_with_options, SkeletonArc, SkeletonGraph,
    SkeletonNode, SkeletonOptions, Subtree,
};
