//! The merge-tree node and the level-partition derivation.

mod node;
mod partition;

pub use node::{Children, Cluster};
pub use partition::level_partition;
