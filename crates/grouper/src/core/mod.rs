//! The core types and algorithms for `grouper`.

pub mod cluster;
pub mod dataset;
pub mod metric;
pub mod tree;

pub use cluster::{level_partition, Cluster};
pub use dataset::{Rankings, RatingTable};
pub use metric::Metric;
pub use tree::HierarchicalClustering;
