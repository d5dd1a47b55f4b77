//! The `Metric` trait is used for all dissimilarity computations in `grouper`.

use distances::number::Float;

mod pearson;

pub use pearson::{Pearson, FALLBACK_DISTANCE};

/// A dissimilarity measure over two paired sequences of values.
///
/// The two slices represent values at the same ordered set of shared feature
/// keys, so implementations may assume equal lengths. Callers must never pass
/// empty slices; the degenerate empty-intersection case is resolved to
/// [`FALLBACK_DISTANCE`] before a metric is consulted.
pub trait Metric<U: Float> {
    /// Returns the dissimilarity between the two value sequences.
    fn distance(&self, x: &[U], y: &[U]) -> U;

    /// Returns the name of the metric.
    fn name(&self) -> &str;
}
