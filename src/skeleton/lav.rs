//! Lists of active vertices: the closed rings of the wavefront.

use super::vertex::{ActiveVertex, VertexId};
use crate::error::SkeletonError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Arena index of a [`Lav`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct LavId(pub usize);

/// A closed ring of active vertices.
///
/// The ring itself lives in the vertex arena as `prev`/`next` links; a lav
/// only records an entry point and its length.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lav {
    pub id: LavId,
    pub head: Option<VertexId>,
    pub len: usize,
}

impl Lav {
    /// Builds a ring from a normalized contour, appending its vertices to
    /// `vertices`. Vertex `i` sits between edges `(i - 1, i)` and `(i, i + 1)`.
    pub fn from_polygon<F: Float>(
        id: LavId,
        points: &[Point2<F>],
        vertices: &mut Vec<ActiveVertex<F>>,
    ) -> Self {
        let n = points.len();
        let base = vertices.len();

        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let point = points[i];
            let next = points[(i + 1) % n];

            let mut vertex = ActiveVertex::new(
                VertexId(base + i),
                point,
                Segment2::new(prev, point),
                Segment2::new(point, next),
                None,
            );
            vertex.prev = VertexId(base + (i + n - 1) % n);
            vertex.next = VertexId(base + (i + 1) % n);
            vertex.lav = Some(id);
            vertices.push(vertex);
        }

        Self {
            id,
            head: (n > 0).then_some(VertexId(base)),
            len: n,
        }
    }

    /// Adopts an already linked ring starting at `head`.
    pub fn from_chain<F: Float>(
        id: LavId,
        head: VertexId,
        vertices: &mut [ActiveVertex<F>],
    ) -> Self {
        let mut lav = Self {
            id,
            head: Some(head),
            len: 0,
        };

        for vid in lav.vertex_ids(vertices) {
            vertices[vid.0].lav = Some(id);
            lav.len += 1;
        }

        lav
    }

    /// Walks the ring once from the head.
    pub fn vertex_ids<F>(&self, vertices: &[ActiveVertex<F>]) -> Vec<VertexId> {
        let mut ids = Vec::new();
        let Some(head) = self.head else {
            return ids;
        };

        let mut current = head;
        // A ring can't be longer than the arena; this bounds the walk even if
        // the links are corrupt.
        for _ in 0..vertices.len() {
            ids.push(current);
            current = vertices[current.0].next;
            if current == head {
                break;
            }
        }

        ids
    }

    /// Marks a vertex of this ring as consumed.
    ///
    /// The neighbours' links are left alone; callers relink them. If the
    /// vertex was the head, the head moves to its successor.
    pub fn invalidate<F>(
        &mut self,
        id: VertexId,
        vertices: &mut [ActiveVertex<F>],
    ) -> Result<(), SkeletonError> {
        let vertex = &mut vertices[id.0];
        if vertex.lav != Some(self.id) {
            return Err(SkeletonError::ForeignVertex {
                vertex: id.0,
                contour: self.id.0,
            });
        }

        vertex.valid = false;
        vertex.lav = None;
        let next = vertex.next;

        if self.head == Some(id) {
            self.head = Some(next);
        }

        Ok(())
    }

    /// Replaces adjacent vertices `a` and `b` by one new vertex at `point`.
    ///
    /// The new vertex inherits `a`'s left edge and `b`'s right edge; its
    /// reflexivity is decided by the bisectors of the two vertices it
    /// replaces. Returns the id of the new vertex.
    pub fn unify<F: Float>(
        &mut self,
        a: VertexId,
        b: VertexId,
        point: Point2<F>,
        vertices: &mut Vec<ActiveVertex<F>>,
    ) -> Result<VertexId, SkeletonError> {
        let va = vertices[a.0];
        let vb = vertices[b.0];
        let id = VertexId(vertices.len());

        let mut merged = ActiveVertex::new(
            id,
            point,
            va.edge_left,
            vb.edge_right,
            Some((
                vb.bisector.direction.normalize_or_zero(),
                va.bisector.direction.normalize_or_zero(),
            )),
        );
        merged.lav = Some(self.id);
        merged.prev = va.prev;
        merged.next = vb.next;
        vertices.push(merged);

        if self.head == Some(a) || self.head == Some(b) {
            self.head = Some(id);
        }

        vertices[va.prev.0].next = id;
        vertices[vb.next.0].prev = id;

        self.invalidate(a, vertices)?;
        self.invalidate(b, vertices)?;
        self.len -= 1;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    // Clockwise unit square, as the simulation sees it.
    fn square() -> Vec<Point2<f64>> {
        vec![p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)]
    }

    #[test]
    fn test_from_polygon_links_ring() {
        let mut vertices = Vec::new();
        let lav = Lav::from_polygon(LavId(0), &square(), &mut vertices);

        assert_eq!(lav.len, 4);
        assert_eq!(lav.head, Some(VertexId(0)));
        assert_eq!(vertices[0].prev, VertexId(3));
        assert_eq!(vertices[3].next, VertexId(0));
        assert_eq!(vertices[2].edge_left, Segment2::new(p(1.0, 1.0), p(1.0, 0.0)));
        assert!(vertices.iter().all(|v| v.lav == Some(LavId(0))));
        assert!(vertices.iter().all(|v| !v.is_reflex));
    }

    #[test]
    fn test_second_ring_offsets_ids() {
        let mut vertices = Vec::new();
        Lav::from_polygon(LavId(0), &square(), &mut vertices);
        let lav = Lav::from_polygon(LavId(1), &square(), &mut vertices);

        assert_eq!(lav.head, Some(VertexId(4)));
        assert_eq!(vertices[4].prev, VertexId(7));
        assert_eq!(
            lav.vertex_ids(&vertices),
            vec![VertexId(4), VertexId(5), VertexId(6), VertexId(7)]
        );
    }

    #[test]
    fn test_invalidate_moves_head() {
        let mut vertices = Vec::new();
        let mut lav = Lav::from_polygon(LavId(0), &square(), &mut vertices);

        lav.invalidate(VertexId(0), &mut vertices).unwrap();
        assert_eq!(lav.head, Some(VertexId(1)));
        assert!(!vertices[0].valid);
        assert!(vertices[0].lav.is_none());
    }

    #[test]
    fn test_invalidate_foreign_vertex() {
        let mut vertices = Vec::new();
        let mut first = Lav::from_polygon(LavId(0), &square(), &mut vertices);
        Lav::from_polygon(LavId(1), &square(), &mut vertices);

        let err = first.invalidate(VertexId(5), &mut vertices).unwrap_err();
        assert_eq!(
            err,
            SkeletonError::ForeignVertex {
                vertex: 5,
                contour: 0
            }
        );
        assert!(vertices[5].valid);
    }

    #[test]
    fn test_unify_replaces_pair() {
        let mut vertices = Vec::new();
        let mut lav = Lav::from_polygon(LavId(0), &square(), &mut vertices);

        let id = lav
            .unify(VertexId(0), VertexId(1), p(0.5, 0.5), &mut vertices)
            .unwrap();

        assert_eq!(id, VertexId(4));
        assert_eq!(lav.len, 3);
        assert_eq!(lav.head, Some(id));
        assert_eq!(
            lav.vertex_ids(&vertices),
            vec![VertexId(4), VertexId(2), VertexId(3)]
        );
        assert_eq!(vertices[3].next, id);
        assert_eq!(vertices[2].prev, id);

        let merged = vertices[id.0];
        assert_eq!(merged.edge_left, vertices[0].edge_left);
        assert_eq!(merged.edge_right, vertices[1].edge_right);
        assert!(!merged.is_reflex);
        assert!(!vertices[0].valid && !vertices[1].valid);
    }

    #[test]
    fn test_from_chain_adopts_ring() {
        let mut vertices = Vec::new();
        Lav::from_polygon(LavId(0), &square(), &mut vertices);

        let lav = Lav::from_chain(LavId(3), VertexId(2), &mut vertices);
        assert_eq!(lav.len, 4);
        assert!(vertices.iter().all(|v| v.lav == Some(LavId(3))));
    }
}
