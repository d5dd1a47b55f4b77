//! Orchestrates agglomerative clustering over a rating table.

use std::collections::HashMap;

use distances::number::Float;
use mt_logger::{mt_log, Level};

use crate::core::cluster::Cluster;
use crate::core::dataset::{Rankings, RatingTable};
use crate::core::metric::{Metric, Pearson, FALLBACK_DISTANCE};
use crate::error::Result;

/// Builds merge trees and distance matrices from rating tables.
///
/// The clusterer owns the metric and nothing else; every run owns its own
/// [`DistanceCache`], so one clusterer may be reused across tables.
pub struct HierarchicalClustering<M> {
    /// The pairwise dissimilarity measure.
    metric: M,
}

impl Default for HierarchicalClustering<Pearson> {
    fn default() -> Self {
        Self::new(Pearson)
    }
}

impl<M> HierarchicalClustering<M> {
    /// Creates a clusterer with the given metric.
    pub const fn new(metric: M) -> Self {
        Self { metric }
    }

    /// Builds the merge tree for the given table.
    ///
    /// Starting from one leaf per entity, the two closest clusters are
    /// repeatedly merged into an internal node carrying their distance,
    /// until a single root remains. Pairs are scanned in nested ascending
    /// order over the active clusters and the first pair at the minimum
    /// distance wins, so the shape of the tree is deterministic for a given
    /// entity order. The merged node joins the end of the active list.
    ///
    /// A table with exactly one entity yields that entity's leaf with no
    /// merges.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or an entity has no feature
    /// keys.
    pub fn build<U: Float>(&self, table: &RatingTable<U>) -> Result<Cluster<U>>
    where
        M: Metric<U>,
    {
        table.validate()?;

        mt_log!(
            Level::Debug,
            "Building a cluster tree over {} entities ...",
            table.len()
        );

        let mut cache = DistanceCache::new();
        let mut clusters = initial_clusters(table);
        let mut next_id = clusters.len();

        while clusters.len() > 1 {
            let (i, j, distance) = self.closest_pair(&clusters, &mut cache);

            // The later index is removed first so the earlier stays valid.
            let (_, right) = clusters.remove(j);
            let (_, left) = clusters.remove(i);
            clusters.push((next_id, Cluster::merge(left, right, distance)));
            next_id += 1;

            mt_log!(
                Level::Debug,
                "Merged two clusters at distance {distance}, {} remaining ...",
                clusters.len()
            );
        }

        let (_, root) = clusters
            .pop()
            .unwrap_or_else(|| unreachable!("A validated table has at least one cluster"));

        mt_log!(
            Level::Debug,
            "Finished building a cluster tree of depth {}.",
            root.depth()
        );

        Ok(root)
    }

    /// Computes the distance between every pair of original entities.
    ///
    /// The result covers all `n * (n - 1) / 2` unordered pairs of entity
    /// names, independent of any merge tree; each key pairs the earlier
    /// name (in table order) with the later one.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or an entity has no feature
    /// keys.
    pub fn distance_matrix<U: Float>(&self, table: &RatingTable<U>) -> Result<HashMap<(String, String), U>>
    where
        M: Metric<U>,
    {
        table.validate()?;

        let entries = table.iter().collect::<Vec<_>>();
        let mut matrix = HashMap::new();

        for (i, &(name_a, rankings_a)) in entries.iter().enumerate() {
            for &(name_b, rankings_b) in &entries[(i + 1)..] {
                let distance = self.pair_distance(rankings_a, rankings_b);
                matrix.insert((name_a.to_string(), name_b.to_string()), distance);
            }
        }

        Ok(matrix)
    }

    /// Finds the indices and distance of the closest pair of active
    /// clusters.
    ///
    /// Scans pairs in nested ascending index order; only a strictly smaller
    /// distance displaces the current minimum, so the first pair at the
    /// minimum wins.
    fn closest_pair<U: Float>(
        &self,
        clusters: &[(usize, Cluster<U>)],
        cache: &mut DistanceCache<U>,
    ) -> (usize, usize, U)
    where
        M: Metric<U>,
    {
        let mut closest = (0, 1, self.cluster_distance(&clusters[0], &clusters[1], cache));

        for (i, a) in clusters.iter().enumerate() {
            for (j, b) in clusters.iter().enumerate().skip(i + 1) {
                let distance = self.cluster_distance(a, b, cache);
                if distance < closest.2 {
                    closest = (i, j, distance);
                }
            }
        }

        closest
    }

    /// Computes the distance between two clusters, memoized by their ids.
    ///
    /// Ids, not names or contents, key the cache: two distinct clusters can
    /// carry identical aggregated rankings.
    fn cluster_distance<U: Float>(
        &self,
        (a_id, a): &(usize, Cluster<U>),
        (b_id, b): &(usize, Cluster<U>),
        cache: &mut DistanceCache<U>,
    ) -> U
    where
        M: Metric<U>,
    {
        cache.get_or_insert_with(*a_id, *b_id, || self.pair_distance(a.rankings(), b.rankings()))
    }

    /// Computes the metric over the shared keys of two rankings.
    ///
    /// An empty key intersection never reaches the metric; it resolves to
    /// [`FALLBACK_DISTANCE`] directly.
    fn pair_distance<U: Float>(&self, a: &Rankings<U>, b: &Rankings<U>) -> U
    where
        M: Metric<U>,
    {
        let commons = a.commons(b);
        if commons.is_empty() {
            return U::from(FALLBACK_DISTANCE);
        }

        let (xs, ys): (Vec<U>, Vec<U>) = commons.into_iter().unzip();
        self.metric.distance(&xs, &ys)
    }
}

/// Creates one leaf cluster per entity, tagged with its run-local id.
///
/// Leaves take ids `0..n`; the i-th merged node takes id `n + i`.
fn initial_clusters<U: Float>(table: &RatingTable<U>) -> Vec<(usize, Cluster<U>)> {
    table
        .iter()
        .enumerate()
        .map(|(id, (name, rankings))| (id, Cluster::leaf(name.to_string(), rankings.clone())))
        .collect()
}

/// Memoized pairwise distances for one clustering run.
///
/// Entries are keyed by the unordered pair of cluster ids, normalized so the
/// smaller id comes first; each entry is written once and read many times.
/// A cache belongs to a single `build` invocation and is never shared.
struct DistanceCache<U> {
    /// Distances keyed by normalized id pairs.
    distances: HashMap<(usize, usize), U>,
}

impl<U: Copy> DistanceCache<U> {
    /// Creates an empty cache.
    fn new() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    /// Returns the cached distance for the unordered pair, computing and
    /// storing it on first use.
    fn get_or_insert_with(&mut self, a: usize, b: usize, distance: impl FnOnce() -> U) -> U {
        let key = if a < b { (a, b) } else { (b, a) };
        *self.distances.entry(key).or_insert_with(distance)
    }
}
