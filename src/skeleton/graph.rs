//! Node/arc view of a straight skeleton.

use super::subtree::Subtree;
use crate::primitives::Point2;
use num_traits::Float;

/// A node of the skeleton graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode<F> {
    /// Position of the node
    pub point: Point2<F>,
    /// Distance to the boundary; zero for polygon corners
    pub height: F,
}

/// An arc between two nodes, from the higher node down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonArc {
    /// Index of the source node
    pub start: usize,
    /// Index of the sink node
    pub end: usize,
}

/// A straight skeleton as indexed nodes and arcs.
///
/// # Example
///
/// ```
/// use skeletum::{skeletonize, Point2, SkeletonGraph};
///
/// let rectangle = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let graph = SkeletonGraph::from_subtrees(&skeletonize(&rectangle, &[]).unwrap());
/// assert_eq!(graph.nodes.len(), 6);
/// assert_eq!(graph.arcs.len(), 5);
/// assert_eq!(graph.max_height(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SkeletonGraph<F> {
    /// Nodes, each point at most once
    pub nodes: Vec<SkeletonNode<F>>,
    /// Arcs, each pair of nodes at most once
    pub arcs: Vec<SkeletonArc>,
}

impl<F: Float> SkeletonGraph<F> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),
        }
    }

    /// Builds the graph from a list of subtrees.
    ///
    /// Points are matched exactly. A subtree whose sinks include its own
    /// source contributes no arc for it.
    pub fn from_subtrees(subtrees: &[Subtree<F>]) -> Self {
        let mut graph = Self::new();

        for subtree in subtrees {
            let source = graph.insert(subtree.source);
            let node = &mut graph.nodes[source];
            node.height = node.height.max(subtree.height);

            for &sink in &subtree.sinks {
                let end = graph.insert(sink);
                if end != source && !graph.has_arc(source, end) {
                    graph.arcs.push(SkeletonArc { start: source, end });
                }
            }
        }

        graph
    }

    /// Returns the index of the node at exactly `point`.
    pub fn node_index(&self, point: Point2<F>) -> Option<usize> {
        self.nodes.iter().position(|n| n.point == point)
    }

    /// Returns the total length of all arcs.
    pub fn total_length(&self) -> F {
        self.arcs.iter().fold(F::zero(), |length, arc| {
            length + self.nodes[arc.start].point.distance(self.nodes[arc.end].point)
        })
    }

    /// Returns arcs as point pairs.
    pub fn to_segments(&self) -> Vec<(Point2<F>, Point2<F>)> {
        self.arcs
            .iter()
            .map(|a| (self.nodes[a.start].point, self.nodes[a.end].point))
            .collect()
    }

    /// Height of the tallest node, or zero for an empty graph.
    pub fn max_height(&self) -> F {
        self.nodes
            .iter()
            .fold(F::zero(), |highest, n| highest.max(n.height))
    }

    fn insert(&mut self, point: Point2<F>) -> usize {
        self.node_index(point).unwrap_or_else(|| {
            self.nodes.push(SkeletonNode {
                point,
                height: F::zero(),
            });
            self.nodes.len() - 1
        })
    }

    fn has_arc(&self, a: usize, b: usize) -> bool {
        self.arcs
            .iter()
            .any(|arc| (arc.start == a && arc.end == b) || (arc.start == b && arc.end == a))
    }
}

impl<F: Float> Default for SkeletonGraph<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn rectangle_subtrees() -> Vec<Subtree<f64>> {
        vec![
            Subtree::new(p(1.0, 1.0), 1.0, vec![p(0.0, 0.0), p(0.0, 2.0)]),
            Subtree::new(p(3.0, 1.0), 1.0, vec![p(1.0, 1.0), p(4.0, 2.0), p(4.0, 0.0)]),
        ]
    }

    #[test]
    fn test_empty_graph() {
        let graph = SkeletonGraph::<f64>::from_subtrees(&[]);
        assert!(graph.nodes.is_empty());
        assert_eq!(graph.total_length(), 0.0);
        assert_eq!(graph.max_height(), 0.0);
    }

    #[test]
    fn test_shared_node_is_reused() {
        let graph = SkeletonGraph::from_subtrees(&rectangle_subtrees());

        assert_eq!(graph.nodes.len(), 6);
        assert_eq!(graph.arcs.len(), 5);
        let inner = graph.node_index(p(1.0, 1.0)).unwrap();
        assert_eq!(graph.nodes[inner].height, 1.0);
        assert_eq!(graph.node_index(p(4.0, 0.0)).map(|i| graph.nodes[i].height), Some(0.0));
        assert!(graph.node_index(p(2.0, 1.0)).is_none());
    }

    #[test]
    fn test_total_length() {
        let graph = SkeletonGraph::from_subtrees(&rectangle_subtrees());
        assert_relative_eq!(graph.total_length(), 2.0 + 4.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_self_sink_and_duplicates_skipped() {
        let subtrees = vec![
            Subtree::new(p(0.5, 0.5), 0.5, vec![p(0.0, 0.0), p(0.5, 0.5), p(0.0, 0.0)]),
            Subtree::new(p(1.0, 1.0), 0.5, vec![p(0.5, 0.5)]),
        ];
        let graph = SkeletonGraph::from_subtrees(&subtrees);

        assert_eq!(graph.arcs.len(), 2);
        assert_eq!(
            graph.to_segments(),
            vec![(p(0.5, 0.5), p(0.0, 0.0)), (p(1.0, 1.0), p(0.5, 0.5))]
        );
    }
}
