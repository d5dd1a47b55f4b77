//! A sparse mapping of feature keys to rating values.

use core::marker::PhantomData;

use distances::number::Float;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A sparse, insertion-ordered mapping from feature key to rating value.
///
/// One `Rankings` belongs to one cluster: either an original entity or a
/// merged cluster's aggregate. Keys are unique within one vector; inserting
/// an existing key replaces its value. A `Rankings` is never mutated after
/// construction by the clustering algorithm. Merging builds a new vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings<U: Float> {
    /// Key-value pairs in insertion order.
    entries: Vec<(String, U)>,
}

impl<U: Float> Rankings<U> {
    /// Creates a `Rankings` from key-value pairs.
    ///
    /// Pairs are kept in encounter order. If a key repeats, the last value
    /// wins, matching JSON object semantics.
    pub fn from_entries<I: IntoIterator<Item = (String, U)>>(entries: I) -> Self {
        let mut rankings = Self { entries: Vec::new() };
        for (key, value) in entries {
            rankings.insert(key, value);
        }
        rankings
    }

    /// Inserts a key-value pair, replacing the value if the key is present.
    pub(crate) fn insert(&mut self, key: String, value: U) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value for the given key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<U> {
        self.entries.iter().find(|(k, _)| k == key).map(|&(_, v)| v)
    }

    /// Returns the feature keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of feature keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this vector has no feature keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs up the values for every key present in both vectors.
    ///
    /// The result is ordered by this vector's key order, so repeated calls
    /// are reproducible and the two value streams stay correctly paired. An
    /// empty result means the two vectors share no keys; the caller must
    /// treat that distance as degenerate rather than invoking a metric over
    /// empty sequences.
    #[must_use]
    pub fn commons(&self, other: &Self) -> Vec<(U, U)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| other.get(k).map(|w| (*v, w)))
            .collect()
    }

    /// Builds the aggregate of this vector (the left child) and `other` (the
    /// right child) for a merged cluster.
    ///
    /// For every key of this vector, the merged value is the mean of this
    /// value and the other vector's value for the same key, defaulting to
    /// zero when the other vector lacks the key. Keys present only in
    /// `other` are dropped. The left bias is deliberate; a symmetric
    /// alternative would aggregate over the union of both key sets.
    #[must_use]
    pub fn averaged_with(&self, other: &Self) -> Self {
        let two = U::ONE + U::ONE;
        Self {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), (*v + other.get(k).unwrap_or(U::ZERO)) / two))
                .collect(),
        }
    }
}

impl<'de, U: Float> Deserialize<'de> for Rankings<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RankingsVisitor(PhantomData))
    }
}

/// Visits a map of feature keys to numeric values, preserving encounter order.
struct RankingsVisitor<U: Float>(PhantomData<U>);

impl<'de, U: Float> Visitor<'de> for RankingsVisitor<U> {
    type Value = Rankings<U>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a map of feature keys to numeric ratings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut rankings = Rankings {
            entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
        };
        while let Some((key, value)) = map.next_entry::<String, f64>()? {
            rankings.insert(key, U::from(value));
        }
        Ok(rankings)
    }
}
