//! Output records of the skeleton simulation.

use crate::primitives::Point2;
use num_traits::Float;

/// One node of the straight skeleton and the points that feed into it.
///
/// `source` is where part of the wavefront collapsed, `height` is the
/// distance the wavefront travelled to get there (the roof height in a
/// hip-roof reading), and `sinks` are the boundary corners and lower
/// skeleton nodes connected to `source` by skeleton arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtree<F> {
    /// The skeleton node.
    pub source: Point2<F>,
    /// Distance from the source to the polygon boundary.
    pub height: F,
    /// Points connected to the source, lower in the skeleton.
    pub sinks: Vec<Point2<F>>,
}

impl<F: Float> Subtree<F> {
    /// Creates a new subtree.
    pub fn new(source: Point2<F>, height: F, sinks: Vec<Point2<F>>) -> Self {
        Self {
            source,
            height,
            sinks,
        }
    }
}

/// Merges subtrees that share exactly the same source.
///
/// Highly symmetric polygons collapse several wavefront pieces at one point,
/// each event emitting its own subtree. The first subtree at a source keeps
/// its place in the list and absorbs the sinks of the later ones (skipping
/// sinks it already has); the later ones are dropped.
pub fn merge_sources<F: Float>(skeleton: &mut Vec<Subtree<F>>) {
    let mut merged: Vec<Subtree<F>> = Vec::with_capacity(skeleton.len());

    for subtree in skeleton.drain(..) {
        match merged.iter_mut().find(|s| s.source == subtree.source) {
            Some(existing) => {
                for sink in subtree.sinks {
                    if !existing.sinks.contains(&sink) {
                        existing.sinks.push(sink);
                    }
                }
            }
            None => merged.push(subtree),
        }
    }

    *skeleton = merged;
}
