//! Tolerances and limits for skeleton construction.

use num_traits::Float;

/// Options for [`skeletonize_with_options`](super::skeletonize_with_options).
///
/// # Example
///
/// ```
/// use skeletum::SkeletonOptions;
///
/// let options = SkeletonOptions::<f64>::default()
///     .epsilon(1e-7)
///     .max_events(10_000);
/// assert_eq!(options.max_events, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonOptions<F> {
    /// Slack for the side-of-bisector tests on split events. A candidate
    /// counts as inside a wedge when its unit cross product is within
    /// `epsilon` of the right sign.
    pub epsilon: F,
    /// Relative tolerance for approximate point equality.
    pub relative_tolerance: F,
    /// How far behind a vertex two neighbouring bisectors may cross and
    /// still produce an edge event, as a fraction of the largest input
    /// coordinate.
    pub crossing_slack: F,
    /// Stop with an error after popping this many events (stale ones
    /// included). `None` runs until the wavefront collapses.
    pub max_events: Option<usize>,
}

impl<F: Float> Default for SkeletonOptions<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(1e-5).unwrap_or_else(F::epsilon),
            relative_tolerance: F::from(1e-3).unwrap_or_else(F::epsilon),
            crossing_slack: F::from(1e-9)
                .unwrap_or_else(F::epsilon)
                .max(F::epsilon()),
            max_events: None,
        }
    }
}

impl<F: Float> SkeletonOptions<F> {
    /// Sets the side-test slack.
    pub fn epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the relative tolerance for point comparisons.
    pub fn relative_tolerance(mut self, tolerance: F) -> Self {
        self.relative_tolerance = tolerance;
        self
    }

    /// Sets the bisector crossing slack.
    pub fn crossing_slack(mut self, slack: F) -> Self {
        self.crossing_slack = slack;
        self
    }

    /// Caps the number of events the simulation may pop.
    pub fn max_events(mut self, limit: usize) -> Self {
        self.max_events = Some(limit);
        self
    }
}
