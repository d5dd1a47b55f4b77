//! A `Cluster` is a node in the binary merge tree.

use distances::number::Float;
use serde::Serialize;

use crate::core::dataset::Rankings;

/// A node in the merge tree.
///
/// A `Cluster` is either a leaf holding one original entity, or an internal
/// node holding the aggregate of the two clusters it merged. A node is a leaf
/// iff it has a name iff it has no children; the two constructors are the
/// only way to build a node, so the invariant cannot be broken after
/// construction. The tree exclusively owns its subtrees: once merged, a
/// child is never re-attached elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<U: Float> {
    /// The aggregated rankings of every entity under this node.
    rankings: Rankings<U>,
    /// The entity name, present iff this node is a leaf.
    name: Option<String>,
    /// The merged subtrees, present iff this node is internal.
    children: Option<Children<U>>,
}

/// The subtrees of an internal `Cluster`, together with the distance at
/// which they were merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Children<U: Float> {
    /// The earlier cluster of the merged pair, by scan order.
    left: Box<Cluster<U>>,
    /// The later cluster of the merged pair, by scan order.
    right: Box<Cluster<U>>,
    /// The pairwise distance between the two children at merge time.
    distance: U,
}

impl<U: Float> Cluster<U> {
    /// Creates a leaf for one original entity.
    pub fn leaf(name: String, rankings: Rankings<U>) -> Self {
        Self {
            rankings,
            name: Some(name),
            children: None,
        }
    }

    /// Merges two clusters into a new internal node at the given distance.
    ///
    /// The aggregated rankings follow the left-biased averaging rule of
    /// [`Rankings::averaged_with`], with `left` as the left child.
    pub(crate) fn merge(left: Self, right: Self, distance: U) -> Self {
        let rankings = left.rankings.averaged_with(&right.rankings);
        Self {
            rankings,
            name: None,
            children: Some(Children {
                left: Box::new(left),
                right: Box::new(right),
                distance,
            }),
        }
    }

    /// Whether this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The entity name, present iff this node is a leaf.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The aggregated rankings of this node.
    #[must_use]
    pub const fn rankings(&self) -> &Rankings<U> {
        &self.rankings
    }

    /// The left and right subtrees, present iff this node is internal.
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        self.children.as_ref().map(|c| (c.left.as_ref(), c.right.as_ref()))
    }

    /// The distance at which the two children were merged, present iff this
    /// node is internal.
    #[must_use]
    pub fn merge_distance(&self) -> Option<U> {
        self.children.as_ref().map(|c| c.distance)
    }

    /// The number of leaves under this node.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.children().map_or(1, |(l, r)| l.cardinality() + r.cardinality())
    }

    /// The number of edges from this node to its furthest leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children().map_or(0, |(l, r)| 1 + l.depth().max(r.depth()))
    }

    /// Collects every leaf name under this node.
    ///
    /// Names are reported in depth-first left-then-right order. The order is
    /// fixed so that the level partition, which groups names by subtree, is
    /// reproducible across calls.
    #[must_use]
    pub fn all_names(&self) -> Vec<String> {
        match (&self.name, self.children()) {
            (Some(name), _) => vec![name.clone()],
            (None, Some((left, right))) => {
                let mut names = left.all_names();
                names.extend(right.all_names());
                names
            }
            // Unreachable by construction: a nameless node has children.
            (None, None) => Vec::new(),
        }
    }
}
