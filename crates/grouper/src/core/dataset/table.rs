//! The decoded input: an ordered mapping of entity names to their rankings.

use core::marker::PhantomData;

use distances::number::Float;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

use super::Rankings;

/// The decoded input data: one [`Rankings`] per named entity.
///
/// Entities are kept in encounter order. The clustering tie-break scans
/// clusters in this order, so the order of the table decides the shape of
/// the tree when distances tie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTable<U: Float> {
    /// Name-rankings pairs in encounter order.
    entries: Vec<(String, Rankings<U>)>,
}

impl<U: Float> RatingTable<U> {
    /// Creates a table from name-rankings pairs.
    ///
    /// Pairs are kept in encounter order. If a name repeats, the last
    /// rankings win, matching JSON object semantics.
    pub fn from_entries<I: IntoIterator<Item = (String, Rankings<U>)>>(entries: I) -> Self {
        let mut table = Self { entries: Vec::new() };
        for (name, rankings) in entries {
            table.insert(name, rankings);
        }
        table
    }

    /// Decodes a table from a JSON document mapping entity names to objects
    /// of feature keys and numeric ratings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the document is not valid JSON or
    /// does not have the required shape, e.g. a rating that is not a number.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| Error::InvalidFormat(e.to_string()))
    }

    /// Inserts an entity, replacing its rankings if the name is present.
    pub(crate) fn insert(&mut self, name: String, rankings: Rankings<U>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = rankings;
        } else {
            self.entries.push((name, rankings));
        }
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entities in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rankings<U>)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Checks that the table can be clustered at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for a table with no entities and
    /// [`Error::EmptyRankings`] for an entity with no feature keys.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::EmptyInput);
        }
        for (name, rankings) in &self.entries {
            if rankings.is_empty() {
                return Err(Error::EmptyRankings { name: name.clone() });
            }
        }
        Ok(())
    }
}

impl<'de, U: Float> Deserialize<'de> for RatingTable<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

/// Visits a map of entity names to rankings, preserving encounter order.
struct TableVisitor<U: Float>(PhantomData<U>);

impl<'de, U: Float> Visitor<'de> for TableVisitor<U> {
    type Value = RatingTable<U>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a map of entity names to rating objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> core::result::Result<Self::Value, A::Error> {
        let mut table = RatingTable {
            entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
        };
        while let Some((name, rankings)) = map.next_entry::<String, Rankings<U>>()? {
            table.insert(name, rankings);
        }
        Ok(table)
    }
}
