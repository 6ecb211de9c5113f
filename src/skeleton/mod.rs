//! Straight skeleton construction by wavefront simulation.
//!
//! Every edge of the polygon moves inward at unit speed. Two kinds of
//! events change the shape of the shrinking wavefront:
//!
//! - an **edge event**: an edge shrinks to nothing and its two endpoints
//!   merge (or, for the last three edges of a contour, the contour
//!   collapses to a point);
//! - a **split event**: a reflex vertex runs into an edge on the far side of
//!   the contour and cuts it in two, or into a hole, joining it to the
//!   contour.
//!
//! Events are processed in order of distance from the boundary. Each one
//! emits a [`Subtree`]: a skeleton node and the points it connects down to.
//!
//! # Example
//!
//! ```
//! use skeletum::{skeletonize, Point2};
//!
//! let rectangle = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let skeleton = skeletonize(&rectangle, &[]).unwrap();
//! let sources: Vec<_> = skeleton.iter().map(|s| s.source).collect();
//! assert_eq!(sources, vec![Point2::new(1.0, 1.0), Point2::new(3.0, 1.0)]);
//! ```

mod event;
mod graph;
mod lav;
mod options;
mod slav;
mod subtree;
mod vertex;

pub use graph::{SkeletonArc, SkeletonGraph, SkeletonNode};
pub use options::SkeletonOptions;
pub use subtree::{merge_sources, Subtree};

use crate::error::SkeletonError;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use event::{EdgeEvent, Event, EventQueue};
use log::{debug, trace};
use num_traits::Float;
use slav::{EventKind, Slav};

/// Per-kind tally of the events popped during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EventCounts {
    pub edge: usize,
    pub peak: usize,
    pub split: usize,
    pub stale: usize,
    pub failed_split: usize,
}

impl EventCounts {
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Edge => self.edge += 1,
            EventKind::Peak => self.peak += 1,
            EventKind::Split => self.split += 1,
            EventKind::FailedSplit => self.failed_split += 1,
        }
    }

    fn total(&self) -> usize {
        self.edge + self.peak + self.split + self.stale + self.failed_split
    }
}

/// Computes the straight skeleton of a polygon with default options.
///
/// `polygon` is the outer boundary, counter-clockwise in a y-up frame;
/// `holes` are clockwise. Neither needs to be closed explicitly.
///
/// # Errors
///
/// Returns [`SkeletonError::DegenerateContour`] if a contour has fewer than
/// three points once repeated and collinear points are removed.
pub fn skeletonize<F: Float>(
    polygon: &[Point2<F>],
    holes: &[Vec<Point2<F>>],
) -> Result<Vec<Subtree<F>>, SkeletonError> {
    skeletonize_with_options(polygon, holes, &SkeletonOptions::default())
}

/// Computes the straight skeleton of a polygon.
///
/// Subtrees come out in event order, which is roughly by increasing height;
/// subtrees sharing a source are merged into the first of them.
///
/// # Errors
///
/// Besides bad contours, fails with [`SkeletonError::EventLimitExceeded`]
/// when `options.max_events` is set and reached.
pub fn skeletonize_with_options<F: Float>(
    polygon: &[Point2<F>],
    holes: &[Vec<Point2<F>>],
    options: &SkeletonOptions<F>,
) -> Result<Vec<Subtree<F>>, SkeletonError> {
    run(polygon, holes, options).map(|(skeleton, _)| skeleton)
}

/// Computes the straight skeleton of a [`Polygon`] of any winding.
///
/// The outer boundary is made counter-clockwise and every hole clockwise
/// before the skeleton is built.
pub fn polygon_skeleton<F: Float>(
    polygon: &Polygon<F>,
    holes: &[Polygon<F>],
    options: &SkeletonOptions<F>,
) -> Result<Vec<Subtree<F>>, SkeletonError> {
    let mut outer = polygon.clone();
    outer.ensure_ccw();

    let holes: Vec<Vec<Point2<F>>> = holes
        .iter()
        .map(|hole| {
            let mut hole = hole.clone();
            hole.ensure_cw();
            hole.vertices
        })
        .collect();

    skeletonize_with_options(&outer.vertices, &holes, options)
}

/// An edge event is stale once either vertex was consumed, or when both
/// survive but a split has put them on different contours or cut the edge
/// between them.
fn is_stale_edge<F: Float>(slav: &Slav<F>, event: &EdgeEvent<F>) -> bool {
    let a = slav.vertex(event.vertex_a);
    let b = slav.vertex(event.vertex_b);
    !(a.valid && b.valid) || a.next != event.vertex_b || a.lav != b.lav
}

pub(crate) fn run<F: Float>(
    polygon: &[Point2<F>],
    holes: &[Vec<Point2<F>>],
    options: &SkeletonOptions<F>,
) -> Result<(Vec<Subtree<F>>, EventCounts), SkeletonError> {
    let mut slav = Slav::new(polygon, holes, *options)?;
    let mut queue = EventQueue::new();
    for id in slav.active_vertices() {
        queue.put(slav.vertex(id).next_event(&slav));
    }

    debug!(
        "skeleton: {} contours, {} vertices, {} initial events",
        slav.len(),
        slav.active_vertices().len(),
        queue.len()
    );

    let mut output = Vec::new();
    let mut counts = EventCounts::default();

    while !queue.is_empty() && !slav.is_empty() {
        if let Some(limit) = options.max_events {
            if counts.total() >= limit {
                debug!(
                    "event limit {} reached with {} events pending, next at distance {:?}",
                    limit,
                    queue.len(),
                    queue.peek().and_then(|e| e.distance().to_f64())
                );
                return Err(SkeletonError::EventLimitExceeded { limit });
            }
        }

        let Some(event) = queue.get() else { break };

        let transition = match &event {
            Event::Edge(edge) => {
                if is_stale_edge(&slav, edge) {
                    trace!(
                        "stale edge event {} -> {}",
                        edge.vertex_a.0,
                        edge.vertex_b.0
                    );
                    counts.stale += 1;
                    continue;
                }
                slav.handle_edge_event(edge)?
            }
            Event::Split(split) => {
                if !slav.vertex(split.vertex).valid {
                    trace!("stale split event of vertex {}", split.vertex.0);
                    counts.stale += 1;
                    continue;
                }
                slav.handle_split_event(split)?
            }
        };

        counts.record(transition.kind);
        output.extend(transition.subtree);
        queue.put_all(transition.events);
    }

    merge_sources(&mut output);

    debug!(
        "skeleton: {} subtrees from {} edge, {} peak, {} split events ({} stale, {} failed splits)",
        output.len(),
        counts.edge,
        counts.peak,
        counts.split,
        counts.stale,
        counts.failed_split
    );

    Ok((output, counts))
}
