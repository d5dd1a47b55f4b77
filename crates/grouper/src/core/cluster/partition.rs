//! Deriving the level partition from the merge tree.

use distances::number::Float;

use super::Cluster;

/// Flattens the merge tree into one partition of entity names per depth
/// level.
///
/// Level 0 is the finest partition, with every leaf in its own group. Each
/// later level cuts the tree one edge closer to the root: any node sitting
/// at the cut, and any leaf above it, is one group reporting all of its
/// names. The last level is always the single group of all names. The tree
/// is irregular, so group membership is a function of per-branch depth, not
/// a uniform cut; the number of levels equals the tree's depth plus one.
///
/// A tree that is a single leaf yields exactly one level.
pub fn level_partition<U: Float>(root: &Cluster<U>) -> Vec<Vec<Vec<String>>> {
    if root.is_leaf() {
        return vec![vec![root.all_names()]];
    }

    let mut levels = Vec::new();

    // The unbounded walk emits every leaf singly and measures the depth.
    let (groups, depth) = groups_below(root, 0, None);
    levels.push(groups);

    let mut cut = depth - 1;
    while cut != 0 {
        let (groups, reached) = groups_below(root, 0, Some(cut));
        levels.push(groups);
        cut = reached - 1;
    }

    levels.push(vec![root.all_names()]);
    levels
}

/// Walks the tree depth-first, emitting one group per node reached at the
/// cut level or per leaf reached above it.
///
/// Returns the groups in left-then-right traversal order, along with the
/// maximum depth reached by the walk.
fn groups_below<U: Float>(
    cluster: &Cluster<U>,
    level: usize,
    cut: Option<usize>,
) -> (Vec<Vec<String>>, usize) {
    if cut.is_some_and(|max| level >= max) {
        return (vec![cluster.all_names()], level);
    }

    match cluster.children() {
        None => (vec![cluster.all_names()], level),
        Some((left, right)) => {
            let (mut groups, left_depth) = groups_below(left, level + 1, cut);
            let (right_groups, right_depth) = groups_below(right, level + 1, cut);
            groups.extend(right_groups);
            (groups, left_depth.max(right_depth))
        }
    }
}
