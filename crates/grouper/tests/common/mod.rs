//! Shared fixtures for the integration tests.

use grouper::{Rankings, RatingTable};

/// Builds a rating table from borrowed rows.
pub fn table(rows: &[(&str, &[(&str, f64)])]) -> RatingTable<f64> {
    RatingTable::from_entries(rows.iter().map(|(name, ratings)| {
        (
            (*name).to_string(),
            Rankings::from_entries(ratings.iter().map(|(k, v)| ((*k).to_string(), *v))),
        )
    }))
}

/// Six movies rated by overlapping sets of critics.
pub fn movies() -> RatingTable<f64> {
    table(&[
        ("Movie 1", &[("ebert", 5.0), ("kael", 1.0), ("scott", 4.5), ("dargis", 2.0)]),
        ("Movie 2", &[("ebert", 1.0), ("kael", 5.0), ("scott", 1.5), ("dargis", 4.0)]),
        ("Movie 3", &[("ebert", 2.0), ("kael", 4.5), ("scott", 2.0)]),
        ("Movie 4", &[("ebert", 4.5), ("kael", 1.5), ("scott", 5.0), ("dargis", 2.5)]),
        ("Movie 5", &[("ebert", 3.0), ("kael", 3.5), ("dargis", 3.0)]),
        ("Movie 6", &[("ebert", 4.8), ("kael", 1.2), ("scott", 4.8), ("dargis", 1.8)]),
    ])
}

/// Three entities where A and B are near-identical and C is dissimilar.
pub fn abc() -> RatingTable<f64> {
    table(&[
        ("A", &[("k1", 1.0), ("k2", 2.0), ("k3", 3.0)]),
        ("B", &[("k1", 1.1), ("k2", 2.0), ("k3", 2.9)]),
        ("C", &[("k1", 3.0), ("k2", 2.0), ("k3", 1.0)]),
    ])
}
