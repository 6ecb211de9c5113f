//! The set of active contours and the two event handlers.

use super::event::{EdgeEvent, Event, SplitEvent};
use super::lav::{Lav, LavId};
use super::options::SkeletonOptions;
use super::subtree::Subtree;
use super::vertex::{ActiveVertex, VertexId};
use crate::error::SkeletonError;
use crate::primitives::{Point2, Ray2, Segment2};
use crate::tolerance::{normalize_contour, side_of};
use log::trace;
use num_traits::Float;
use std::iter;

/// An edge of the input polygon together with the bisectors of its two
/// endpoints, captured before the simulation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OriginalEdge<F> {
    pub edge: Segment2<F>,
    /// Bisector at the start of the edge.
    pub bisector_left: Ray2<F>,
    /// Bisector at the end of the edge.
    pub bisector_right: Ray2<F>,
    /// Whether the start vertex is reflex.
    pub left_reflex: bool,
    /// Whether the end vertex is reflex.
    pub right_reflex: bool,
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventKind {
    /// Two neighbours merged into one vertex.
    Edge,
    /// A contour collapsed to a point.
    Peak,
    /// A reflex vertex split a contour (or joined a hole to it).
    Split,
    /// No contour edge brackets the split point any more.
    FailedSplit,
}

/// The result of handling one event: at most one new subtree, plus the
/// events newly created vertices take part in.
#[derive(Debug, Clone)]
pub(crate) struct Transition<F> {
    pub kind: EventKind,
    pub subtree: Option<Subtree<F>>,
    pub events: Vec<Event<F>>,
}

/// Set of lists of active vertices.
///
/// Owns every vertex and contour ever created. Consumed vertices stay in
/// the arena flagged invalid so that queued events referring to them can be
/// recognized as stale.
#[derive(Debug, Clone)]
pub(crate) struct Slav<F> {
    vertices: Vec<ActiveVertex<F>>,
    lavs: Vec<Lav>,
    active: Vec<LavId>,
    original_edges: Vec<OriginalEdge<F>>,
    options: SkeletonOptions<F>,
    /// `options.crossing_slack` scaled by the input extent.
    crossing_slack: F,
}

impl<F: Float> Slav<F> {
    /// Builds the initial wavefront from an outer contour and its holes.
    ///
    /// Each contour is reversed into the simulation's winding and
    /// normalized. Contour `0` is the outer one; hole `i` is contour `i + 1`.
    pub fn new(
        polygon: &[Point2<F>],
        holes: &[Vec<Point2<F>>],
        options: SkeletonOptions<F>,
    ) -> Result<Self, SkeletonError> {
        let mut vertices = Vec::new();
        let mut lavs = Vec::new();

        let contours = iter::once(polygon).chain(holes.iter().map(Vec::as_slice));
        for (index, contour) in contours.enumerate() {
            let reversed: Vec<Point2<F>> = contour.iter().rev().copied().collect();
            let points = normalize_contour(&reversed);
            if points.len() < 3 {
                return Err(SkeletonError::DegenerateContour {
                    contour: index,
                    vertices: points.len(),
                });
            }

            let id = LavId(lavs.len());
            lavs.push(Lav::from_polygon(id, &points, &mut vertices));
        }

        let original_edges = vertices
            .iter()
            .map(|v| {
                let prev = &vertices[v.prev.0];
                OriginalEdge {
                    edge: v.edge_left,
                    bisector_left: prev.bisector,
                    bisector_right: v.bisector,
                    left_reflex: prev.is_reflex,
                    right_reflex: v.is_reflex,
                }
            })
            .collect();

        let extent = vertices.iter().fold(F::zero(), |m, v| {
            m.max(v.point.x.abs()).max(v.point.y.abs())
        });

        Ok(Self {
            crossing_slack: options.crossing_slack * extent,
            active: lavs.iter().map(|l| l.id).collect(),
            vertices,
            lavs,
            original_edges,
            options,
        })
    }

    pub fn options(&self) -> &SkeletonOptions<F> {
        &self.options
    }

    /// Absolute distance a bisector crossing may lie behind a vertex.
    pub fn crossing_slack(&self) -> F {
        self.crossing_slack
    }

    pub fn original_edges(&self) -> &[OriginalEdge<F>] {
        &self.original_edges
    }

    pub fn vertex(&self, id: VertexId) -> &ActiveVertex<F> {
        &self.vertices[id.0]
    }

    /// `true` once every contour has collapsed.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of contours still shrinking.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Ids of every vertex on an active contour.
    pub fn active_vertices(&self) -> Vec<VertexId> {
        self.active
            .iter()
            .flat_map(|&l| self.lavs[l.0].vertex_ids(&self.vertices))
            .collect()
    }

    fn owner(&self, id: VertexId) -> Result<LavId, SkeletonError> {
        self.vertices[id.0]
            .lav
            .ok_or(SkeletonError::DetachedVertex { vertex: id.0 })
    }

    fn deactivate(&mut self, lav: LavId) {
        self.active.retain(|&l| l != lav);
    }

    fn new_lav(&mut self, head: VertexId) -> LavId {
        let id = LavId(self.lavs.len());
        let lav = Lav::from_chain(id, head, &mut self.vertices);
        self.lavs.push(lav);
        id
    }

    /// Two adjacent vertices meet.
    ///
    /// If they are the last two edges of a triangle the whole contour
    /// collapses at the event point (a peak). Otherwise they are replaced by
    /// a single vertex.
    pub fn handle_edge_event(
        &mut self,
        event: &EdgeEvent<F>,
    ) -> Result<Transition<F>, SkeletonError> {
        let lav = self.owner(event.vertex_a)?;
        let va = self.vertices[event.vertex_a.0];
        let vb = self.vertices[event.vertex_b.0];

        if va.prev == vb.next {
            trace!(
                "peak at ({:?}, {:?}) closes contour {}",
                event.intersection_point.x.to_f64(),
                event.intersection_point.y.to_f64(),
                lav.0
            );
            self.deactivate(lav);

            let ids = self.lavs[lav.0].vertex_ids(&self.vertices);
            let mut sinks = Vec::with_capacity(ids.len());
            for id in ids {
                sinks.push(self.vertices[id.0].point);
                self.lavs[lav.0].invalidate(id, &mut self.vertices)?;
            }

            return Ok(Transition {
                kind: EventKind::Peak,
                subtree: Some(Subtree::new(
                    event.intersection_point,
                    event.distance,
                    sinks,
                )),
                events: Vec::new(),
            });
        }

        let merged = self.lavs[lav.0].unify(
            event.vertex_a,
            event.vertex_b,
            event.intersection_point,
            &mut self.vertices,
        )?;
        trace!(
            "edge event merged {} and {} into {}",
            event.vertex_a.0,
            event.vertex_b.0,
            merged.0
        );

        let events = self.vertices[merged.0].next_event(self).into_iter().collect();

        Ok(Transition {
            kind: EventKind::Edge,
            subtree: Some(Subtree::new(
                event.intersection_point,
                event.distance,
                vec![va.point, vb.point],
            )),
            events,
        })
    }

    /// Finds the live vertices `(x, y)` bounding the opposite edge of a
    /// split, `y` before the edge and `x` after it.
    ///
    /// The edge is matched by exact unit direction and start point; the
    /// split point must additionally fall between the bisectors of `y` and
    /// `x`.
    fn find_opposite_pair(&self, event: &SplitEvent<F>) -> Option<(VertexId, VertexId)> {
        let epsilon = self.options.epsilon;
        let point = event.intersection_point;
        let norm = event.opposite_edge.unit_direction();
        let start = event.opposite_edge.start;

        for id in self.active_vertices() {
            let v = &self.vertices[id.0];
            let (x, y) = if norm == v.edge_left.unit_direction() && start == v.edge_left.start {
                (id, v.prev)
            } else if norm == v.edge_right.unit_direction() && start == v.edge_right.start {
                (v.next, id)
            } else {
                continue;
            };

            let vx = &self.vertices[x.0];
            let vy = &self.vertices[y.0];
            let x_left = side_of(vy.bisector.direction, vy.point, point) >= -epsilon;
            let x_right = side_of(vx.bisector.direction, vx.point, point) <= epsilon;
            if x_left && x_right {
                return Some((x, y));
            }
        }

        None
    }

    /// A reflex vertex hits an edge on the far side of its contour.
    ///
    /// The vertex is replaced by two, one on each side of the cut. When the
    /// edge belongs to the same contour it splits in two; when it belongs to
    /// another contour (a hole) the two join. Pieces left with fewer than
    /// three vertices collapse immediately.
    pub fn handle_split_event(
        &mut self,
        event: &SplitEvent<F>,
    ) -> Result<Transition<F>, SkeletonError> {
        let lav = self.owner(event.vertex)?;
        let v = self.vertices[event.vertex.0];

        let Some((x, y)) = self.find_opposite_pair(event) else {
            trace!(
                "split of vertex {} found no bracketing edge at ({:?}, {:?})",
                event.vertex.0,
                event.intersection_point.x.to_f64(),
                event.intersection_point.y.to_f64()
            );
            // The vertex still has to meet its neighbours.
            return Ok(Transition {
                kind: EventKind::FailedSplit,
                subtree: None,
                events: v.next_edge_event(self).into_iter().collect(),
            });
        };
        let x_lav = self.owner(x)?;

        let point = event.intersection_point;
        let v1 = VertexId(self.vertices.len());
        let v2 = VertexId(self.vertices.len() + 1);

        let mut first = ActiveVertex::new(v1, point, v.edge_left, event.opposite_edge, None);
        first.prev = v.prev;
        first.next = x;
        let mut second = ActiveVertex::new(v2, point, event.opposite_edge, v.edge_right, None);
        second.prev = y;
        second.next = v.next;
        self.vertices.push(first);
        self.vertices.push(second);

        self.vertices[v.prev.0].next = v1;
        self.vertices[x.0].prev = v1;
        self.vertices[v.next.0].prev = v2;
        self.vertices[y.0].next = v2;

        self.deactivate(lav);
        let pieces = if lav != x_lav {
            self.deactivate(x_lav);
            vec![self.new_lav(v1)]
        } else {
            vec![self.new_lav(v1), self.new_lav(v2)]
        };

        let mut sinks = vec![v.point];
        let mut heads = Vec::new();
        for piece in pieces {
            let Lav { head, len, .. } = self.lavs[piece.0];
            let Some(head) = head else { continue };

            if len > 2 {
                self.active.push(piece);
                heads.push(head);
            } else {
                sinks.push(self.vertices[self.vertices[head.0].next.0].point);
                for id in self.lavs[piece.0].vertex_ids(&self.vertices) {
                    self.lavs[piece.0].invalidate(id, &mut self.vertices)?;
                }
            }
        }

        let events = heads
            .into_iter()
            .filter_map(|h| self.vertices[h.0].next_event(self))
            .collect();

        self.lavs[lav.0].invalidate(event.vertex, &mut self.vertices)?;
        trace!(
            "split of vertex {} into {} and {}",
            event.vertex.0,
            v1.0,
            v2.0
        );

        Ok(Transition {
            kind: EventKind::Split,
            subtree: Some(Subtree::new(point, event.distance, sinks)),
            events,
        })
    }
}
