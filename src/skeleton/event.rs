//! Wavefront events and the priority queue that orders them.

use super::vertex::VertexId;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Two adjacent vertices whose bisectors meet: the edge between them
/// shrinks to nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeEvent<F> {
    pub distance: F,
    pub intersection_point: Point2<F>,
    pub vertex_a: VertexId,
    pub vertex_b: VertexId,
}

/// A reflex vertex running into an edge on the far side of the wavefront.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitEvent<F> {
    pub distance: F,
    pub intersection_point: Point2<F>,
    pub vertex: VertexId,
    pub opposite_edge: Segment2<F>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Event<F> {
    Edge(EdgeEvent<F>),
    Split(SplitEvent<F>),
}

impl<F: Float> Event<F> {
    /// Perpendicular distance from the collapse point to the edge that
    /// produced it. This is the queue key.
    pub fn distance(&self) -> F {
        match self {
            Event::Edge(e) => e.distance,
            Event::Split(s) => s.distance,
        }
    }

    pub fn intersection_point(&self) -> Point2<F> {
        match self {
            Event::Edge(e) => e.intersection_point,
            Event::Split(s) => s.intersection_point,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Event::Edge(_) => 0,
            Event::Split(_) => 1,
        }
    }
}

fn compare<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// Total order: distance, then collapse point, then edge before split.
impl<F: Float> Ord for Event<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (p, q) = (self.intersection_point(), other.intersection_point());
        compare(self.distance(), other.distance())
            .then_with(|| compare(p.x, q.x))
            .then_with(|| compare(p.y, q.y))
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl<F: Float> PartialOrd for Event<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> PartialEq for Event<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for Event<F> {}

/// Min-heap of pending events, nearest collapse first.
#[derive(Debug)]
pub(crate) struct EventQueue<F> {
    heap: BinaryHeap<Reverse<Event<F>>>,
}

impl<F: Float> EventQueue<F> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Pushes an event; `None` is ignored.
    pub fn put(&mut self, event: Option<Event<F>>) {
        if let Some(event) = event {
            self.heap.push(Reverse(event));
        }
    }

    pub fn put_all(&mut self, events: impl IntoIterator<Item = Event<F>>) {
        self.heap.extend(events.into_iter().map(Reverse));
    }

    /// Pops the event with the smallest distance.
    pub fn get(&mut self) -> Option<Event<F>> {
        self.heap.pop().map(|Reverse(event)| event)
    }

    pub fn peek(&self) -> Option<&Event<F>> {
        self.heap.peek().map(|Reverse(event)| event)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
