//! Error types for skeleton construction.

use thiserror::Error;

/// Errors that can occur while building a straight skeleton.
///
/// Stale events and split events whose opposite edge has already collapsed
/// are part of normal operation and never surface as errors. The variants
/// below are either bad input or a broken internal invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkeletonError {
    /// A contour has fewer than 3 distinct, non-collinear points.
    #[error("degenerate contour {contour}: {vertices} vertices left after normalization")]
    DegenerateContour {
        /// Index of the contour (0 is the outer boundary, holes follow).
        contour: usize,
        /// Number of points that survived normalization.
        vertices: usize,
    },

    /// A contour was asked to invalidate a vertex it does not own.
    #[error("vertex {vertex} is not owned by contour {contour}")]
    ForeignVertex {
        /// Arena index of the vertex.
        vertex: usize,
        /// Arena index of the contour.
        contour: usize,
    },

    /// A live vertex has no owning contour.
    #[error("vertex {vertex} is not attached to any contour")]
    DetachedVertex {
        /// Arena index of the vertex.
        vertex: usize,
    },

    /// The event cap from the options was reached before the wavefront collapsed.
    #[error("event limit exceeded after {limit} events")]
    EventLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
