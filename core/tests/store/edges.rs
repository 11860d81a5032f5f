use super::build_store;
use castpath_core::{EdgeSet, recency_weight};

#[test]
fn test_recency_weight() {
    assert_eq!(recency_weight(2015), 1);
    assert_eq!(recency_weight(2010), 6);
    assert_eq!(recency_weight(2012), 4);
    assert_eq!(recency_weight(1950), 66);
    assert_eq!(recency_weight(2020), -4);
}

#[test]
fn test_recency_weight_at_year_extremes() {
    assert_eq!(recency_weight(i32::MIN), 2015 + 2_147_483_648 + 1);
    assert_eq!(recency_weight(i32::MAX), 2015 - 2_147_483_647 + 1);
}

#[test]
fn test_full_build_accepts_extreme_years() {
    let store = build_store(&[
        ("A", "Old", i32::MIN),
        ("B", "Old", i32::MIN),
        ("B", "Far", i32::MAX),
        ("C", "Far", i32::MAX),
    ]);
    let edges = EdgeSet::full(&store);

    let a = store.actor_id("A").unwrap();
    let c = store.actor_id("C").unwrap();
    assert_eq!(edges.edge_count(), 4);
    assert_eq!(edges.neighbors(a)[0].weight, 2_147_485_664);
    assert_eq!(edges.neighbors(c)[0].weight, -2_147_481_631);
}

#[test]
fn test_full_build_creates_edges_in_both_directions() {
    let store = build_store(&[
        ("A", "Movie1", 2010),
        ("B", "Movie1", 2010),
        ("B", "Movie2", 2012),
        ("C", "Movie2", 2012),
    ]);
    let edges = EdgeSet::full(&store);

    assert_eq!(edges.edge_count(), 4);

    let a = store.actor_id("A").unwrap();
    let b = store.actor_id("B").unwrap();
    let c = store.actor_id("C").unwrap();

    let from_a = edges.neighbors(a);
    assert_eq!(from_a.len(), 1);
    assert_eq!(from_a[0].actor, a);
    assert_eq!(from_a[0].other, b);
    assert_eq!(from_a[0].weight, 6);

    let from_b: Vec<_> = edges.neighbors(b).iter().map(|edge| (edge.other, edge.weight)).collect();
    assert_eq!(from_b, vec![(a, 6), (c, 4)]);
}

#[test]
fn test_full_build_edge_count_is_quadratic_in_cast() {
    let store = build_store(&[
        ("A", "Ensemble", 2000),
        ("B", "Ensemble", 2000),
        ("C", "Ensemble", 2000),
        ("D", "Ensemble", 2000),
        ("E", "Solo", 2000),
    ]);
    let edges = EdgeSet::full(&store);

    assert_eq!(edges.edge_count(), 12);
    assert!(edges.neighbors(store.actor_id("E").unwrap()).is_empty());
}

#[test]
fn test_incremental_build_accumulates_and_clears() {
    let store = build_store(&[
        ("A", "First", 2000),
        ("B", "First", 2000),
        ("B", "Second", 2001),
        ("C", "Second", 2001),
    ]);
    let b = store.actor_id("B").unwrap();
    let mut edges = EdgeSet::new(store.actor_count());

    edges.add_movies(&store, &store.movies_by_year()[&2000]);
    assert_eq!(edges.neighbors(b).len(), 1);

    edges.add_movies(&store, &store.movies_by_year()[&2001]);
    assert_eq!(edges.neighbors(b).len(), 2);
    assert_eq!(edges.edge_count(), 4);
    assert!(edges.neighbors(b).iter().all(|edge| edge.weight == 1));

    edges.clear();
    assert_eq!(edges.edge_count(), 0);
    assert!(edges.neighbors(b).is_empty());
}
