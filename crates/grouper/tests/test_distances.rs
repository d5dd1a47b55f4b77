//! Tests for the pairwise distance matrix.

use float_cmp::approx_eq;

use grouper::HierarchicalClustering;

mod common;

#[test]
fn matrix_covers_every_unordered_pair_once() {
    let table = common::movies();
    let n = table.len();

    let matrix = HierarchicalClustering::default().distance_matrix(&table).unwrap();
    assert_eq!(matrix.len(), n * (n - 1) / 2);

    let names = table.iter().map(|(name, _)| name.to_string()).collect::<Vec<_>>();
    for (i, a) in names.iter().enumerate() {
        for b in &names[(i + 1)..] {
            assert!(
                matrix.contains_key(&(a.clone(), b.clone())),
                "missing pair ({a}, {b})"
            );
            assert!(
                !matrix.contains_key(&(b.clone(), a.clone())),
                "pair ({b}, {a}) duplicated in reverse order"
            );
        }
    }
}

#[test]
fn distances_stay_in_correlation_range() {
    let matrix = HierarchicalClustering::default()
        .distance_matrix(&common::movies())
        .unwrap();

    for ((a, b), d) in &matrix {
        assert!(
            (-1e-12..=2.0 + 1e-12).contains(d),
            "distance ({a}, {b}) out of range: {d}"
        );
    }
}

#[test]
fn identical_vectors_are_at_distance_zero() {
    let table = common::table(&[
        ("A", &[("k1", 1.0), ("k2", 2.0), ("k3", 3.0)]),
        ("B", &[("k1", 1.0), ("k2", 2.0), ("k3", 3.0)]),
    ]);

    let matrix = HierarchicalClustering::default().distance_matrix(&table).unwrap();
    let d = matrix[&("A".to_string(), "B".to_string())];
    assert!(approx_eq!(f64, d, 0.0, epsilon = 1e-12), "distance: {d}");
}

#[test]
fn zero_variance_vector_falls_back_to_zero() {
    let table = common::table(&[
        ("Flat", &[("k1", 1.0), ("k2", 1.0), ("k3", 1.0)]),
        ("Varied", &[("k1", 0.5), ("k2", 4.0), ("k3", 2.0)]),
    ]);

    let matrix = HierarchicalClustering::default().distance_matrix(&table).unwrap();
    let d = matrix[&("Flat".to_string(), "Varied".to_string())];
    assert!(approx_eq!(f64, d, 0.0, epsilon = 1e-12), "distance: {d}");
}

#[test]
fn disjoint_key_sets_fall_back_to_zero() {
    let table = common::table(&[
        ("Left", &[("k1", 1.0), ("k2", 2.0)]),
        ("Right", &[("k3", 3.0), ("k4", 4.0)]),
    ]);

    let matrix = HierarchicalClustering::default().distance_matrix(&table).unwrap();
    let d = matrix[&("Left".to_string(), "Right".to_string())];
    assert!(approx_eq!(f64, d, 0.0, epsilon = 1e-12), "distance: {d}");
}

#[test]
fn matrix_is_independent_of_merge_order() {
    // Building a tree first must not change the matrix: distances are
    // computed over the original entities, never over merged aggregates.
    let table = common::abc();
    let clusterer = HierarchicalClustering::default();

    let before = clusterer.distance_matrix(&table).unwrap();
    let _root = clusterer.build(&table).unwrap();
    let after = clusterer.distance_matrix(&table).unwrap();

    assert_eq!(before, after);
}
