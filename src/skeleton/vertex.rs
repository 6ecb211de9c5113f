//! Vertices of the shrinking wavefront.

use super::event::{EdgeEvent, Event, SplitEvent};
use super::lav::LavId;
use super::slav::{OriginalEdge, Slav};
use crate::primitives::{Point2, Ray2, Segment2, Vec2};
use crate::tolerance::{approx_same, side_of};
use log::trace;
use num_traits::Float;

/// Arena index of an [`ActiveVertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct VertexId(pub usize);

/// A vertex of a shrinking contour.
///
/// Geometry (point, incident edges, reflexivity, bisector) is fixed when the
/// vertex is created; only the ring links and ownership change afterwards.
/// Events replace vertices instead of moving them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveVertex<F> {
    pub id: VertexId,
    pub point: Point2<F>,
    /// Original edge ending at this vertex.
    pub edge_left: Segment2<F>,
    /// Original edge starting at this vertex.
    pub edge_right: Segment2<F>,
    pub is_reflex: bool,
    pub bisector: Ray2<F>,
    pub prev: VertexId,
    pub next: VertexId,
    /// Owning contour; cleared on invalidation.
    pub lav: Option<LavId>,
    pub valid: bool,
}

impl<F: Float> ActiveVertex<F> {
    /// Creates an unlinked vertex (its `prev` and `next` point at itself).
    ///
    /// `direction_vectors` overrides the pair of unit vectors used for the
    /// reflex test. A vertex produced by merging two others must take its
    /// reflexivity from their bisectors, not from its own edges, which may
    /// be far apart on the original polygon.
    pub fn new(
        id: VertexId,
        point: Point2<F>,
        edge_left: Segment2<F>,
        edge_right: Segment2<F>,
        direction_vectors: Option<(Vec2<F>, Vec2<F>)>,
    ) -> Self {
        let creator_vectors = (-edge_left.unit_direction(), edge_right.unit_direction());
        let (first, second) = direction_vectors.unwrap_or(creator_vectors);
        let is_reflex = first.cross(second) < F::zero();

        let mut direction = creator_vectors.0 + creator_vectors.1;
        if is_reflex {
            direction = -direction;
        }

        Self {
            id,
            point,
            edge_left,
            edge_right,
            is_reflex,
            bisector: Ray2::new(point, direction),
            prev: id,
            next: id,
            lav: None,
            valid: true,
        }
    }

    /// Original edges this vertex could still split, i.e. every edge except
    /// its own two.
    pub fn original_edges<'a>(
        &'a self,
        slav: &'a Slav<F>,
    ) -> impl Iterator<Item = &'a OriginalEdge<F>> + 'a {
        slav.original_edges()
            .iter()
            .filter(move |e| e.edge != self.edge_left && e.edge != self.edge_right)
    }

    /// Finds where this vertex's bisector would hit `edge`.
    ///
    /// The candidate is the point on our bisector equidistant from
    /// `self_edge` (one of our own edges) and the line of `edge`. It is only
    /// kept if it lies inside the wedge swept by `edge` as the wavefront
    /// moves: between the bisectors of its two original endpoints and on
    /// the inner side of the edge. A candidate lying on the bisector of a
    /// reflex endpoint is a head-on meeting of two reflex vertices, not a
    /// split of the edge, and is dropped.
    pub fn next_valid_event(
        &self,
        self_edge: Segment2<F>,
        edge: &OriginalEdge<F>,
        epsilon: F,
        relative_tolerance: F,
    ) -> Option<Point2<F>> {
        let (i, _, _) = self_edge.to_line().intersect_line(&edge.edge.to_line())?;
        if approx_same(i, self.point, relative_tolerance) {
            return None;
        }

        let lin_vec = (self.point - i).normalize_or_zero();
        let mut ed_vec = edge.edge.unit_direction();
        let d = lin_vec.dot(ed_vec);
        // A perpendicular edge: take the direction on our bisector's side.
        let tie_flip = d == F::zero()
            && lin_vec.cross(ed_vec) * lin_vec.cross(self.bisector.direction) < F::zero();
        if d < F::zero() || tie_flip {
            ed_vec = -ed_vec;
        }

        let bisec_vec = ed_vec + lin_vec;
        if approx_same(
            Point2::new(bisec_vec.x, bisec_vec.y),
            Point2::origin(),
            relative_tolerance,
        ) {
            return None;
        }

        let (b, _, _) = Ray2::new(i, bisec_vec).intersect_ray(&self.bisector)?;

        let left_side = side_of(edge.bisector_left.direction, edge.bisector_left.origin, b);
        let right_side = side_of(edge.bisector_right.direction, edge.bisector_right.origin, b);
        let left = left_side > -epsilon;
        let right = right_side < epsilon;
        let inner = side_of(edge.edge.direction(), edge.edge.start, b) < epsilon;

        if left && right && inner {
            if (edge.left_reflex && left_side.abs() < epsilon)
                || (edge.right_reflex && right_side.abs() < epsilon)
            {
                trace!(
                    "discarded split candidate ({:?}, {:?}) on a reflex bisector",
                    b.x.to_f64(),
                    b.y.to_f64()
                );
                return None;
            }
            Some(b)
        } else {
            trace!(
                "discarded split candidate ({:?}, {:?}): left={} right={} inner={}",
                b.x.to_f64(),
                b.y.to_f64(),
                left,
                right,
                inner
            );
            None
        }
    }

    /// Computes the nearest event this vertex takes part in.
    ///
    /// Candidates are the edge events with both neighbours and, for reflex
    /// vertices, a split event per eligible opposite edge. The winner is the
    /// candidate closest to this vertex's point; the queue later orders
    /// winners by their distance to the boundary instead.
    pub fn next_event(&self, slav: &Slav<F>) -> Option<Event<F>> {
        self.nearest_event(slav, true)
    }

    /// Like [`next_event`](Self::next_event), without split candidates.
    pub fn next_edge_event(&self, slav: &Slav<F>) -> Option<Event<F>> {
        self.nearest_event(slav, false)
    }

    fn nearest_event(&self, slav: &Slav<F>, splits: bool) -> Option<Event<F>> {
        let options = slav.options();
        let slack = slav.crossing_slack();
        let mut events = Vec::new();

        if splits && self.is_reflex {
            let left_dir = self.edge_left.unit_direction();
            let right_dir = self.edge_right.unit_direction();

            for edge in self.original_edges(slav) {
                // Pair the opposite edge with whichever of our edges is less
                // parallel to it.
                let edge_dir = edge.edge.unit_direction();
                let left_dot = left_dir.dot(edge_dir).abs();
                let right_dot = right_dir.dot(edge_dir).abs();
                let self_edge = if left_dot < right_dot {
                    self.edge_left
                } else {
                    self.edge_right
                };

                if let Some(b) = self.next_valid_event(
                    self_edge,
                    edge,
                    options.epsilon,
                    options.relative_tolerance,
                ) {
                    events.push(Event::Split(SplitEvent {
                        distance: edge.edge.to_line().distance(b),
                        intersection_point: b,
                        vertex: self.id,
                        opposite_edge: edge.edge,
                    }));
                }
            }
        }

        let prev = slav.vertex(self.prev);
        let next = slav.vertex(self.next);

        if let Some((i_prev, _, _)) = self.bisector.intersect_ray_within(&prev.bisector, slack) {
            events.push(Event::Edge(EdgeEvent {
                distance: self.edge_left.to_line().distance(i_prev),
                intersection_point: i_prev,
                vertex_a: self.prev,
                vertex_b: self.id,
            }));
        }

        if let Some((i_next, _, _)) = self.bisector.intersect_ray_within(&next.bisector, slack) {
            events.push(Event::Edge(EdgeEvent {
                distance: self.edge_right.to_line().distance(i_next),
                intersection_point: i_next,
                vertex_a: self.id,
                vertex_b: self.next,
            }));
        }

        let mut nearest: Option<(F, Event<F>)> = None;
        for event in events {
            let d = self.point.distance_squared(event.intersection_point());
            if nearest.map_or(true, |(best, _)| d < best) {
                nearest = Some((d, event));
            }
        }

        nearest.map(|(_, event)| event)
    }
}
