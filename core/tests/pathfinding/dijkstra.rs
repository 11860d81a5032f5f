use super::{build_store, chain_store, shortcut_store, tie_store};
use castpath_core::{EdgeSet, Network, dijkstra_search};

#[test]
fn test_dijkstra_sums_recency_weights() {
    let store = chain_store();
    let edges = EdgeSet::full(&store);
    let a = store.actor_id("A").unwrap();
    let b = store.actor_id("B").unwrap();
    let c = store.actor_id("C").unwrap();

    let tree = dijkstra_search(Network::new(&store, &edges), a);

    assert_eq!(tree.distance(a), Some(0));
    assert_eq!(tree.distance(b), Some(6));
    assert_eq!(tree.distance(c), Some(10));
    assert_eq!(tree.predecessor(c), Some(b));
}

#[test]
fn test_dijkstra_prefers_recent_movies_over_fewer_hops() {
    let store = shortcut_store();
    let edges = EdgeSet::full(&store);
    let a = store.actor_id("A").unwrap();
    let b = store.actor_id("B").unwrap();
    let d = store.actor_id("D").unwrap();

    let tree = dijkstra_search(Network::new(&store, &edges), a);

    assert_eq!(tree.distance(d), Some(4));
    assert_eq!(tree.predecessor(d), Some(b));
}

#[test]
fn test_dijkstra_dequeues_later_name_first_on_ties() {
    let store = tie_store();
    let edges = EdgeSet::full(&store);
    let a = store.actor_id("A").unwrap();
    let c = store.actor_id("C").unwrap();
    let d = store.actor_id("D").unwrap();

    let tree = dijkstra_search(Network::new(&store, &edges), a);

    // B and C both sit at distance 6; C is finalized first and claims D.
    assert_eq!(tree.distance(d), Some(12));
    assert_eq!(tree.predecessor(d), Some(c));
}

#[test]
fn test_dijkstra_is_deterministic() {
    let store = tie_store();
    let edges = EdgeSet::full(&store);
    let network = Network::new(&store, &edges);
    let a = store.actor_id("A").unwrap();

    let first = dijkstra_search(network, a);
    let second = dijkstra_search(network, a);

    for name in ["A", "B", "C", "D"] {
        let actor = store.actor_id(name).unwrap();
        assert_eq!(first.distance(actor), second.distance(actor));
        assert_eq!(first.predecessor(actor), second.predecessor(actor));
    }
}

#[test]
fn test_dijkstra_distance_never_exceeds_alternative_paths() {
    // Three routes from A to E: direct (1990), via B (2010, 2010), via C and D (2014 each).
    let store = build_store(&[
        ("A", "Direct", 1990),
        ("E", "Direct", 1990),
        ("A", "AB", 2010),
        ("B", "AB", 2010),
        ("B", "BE", 2010),
        ("E", "BE", 2010),
        ("A", "AC", 2014),
        ("C", "AC", 2014),
        ("C", "CD", 2014),
        ("D", "CD", 2014),
        ("D", "DE", 2014),
        ("E", "DE", 2014),
    ]);
    let edges = EdgeSet::full(&store);
    let tree = dijkstra_search(Network::new(&store, &edges), store.actor_id("A").unwrap());
    let e = store.actor_id("E").unwrap();

    let route_weights = [26, 6 + 6, 2 + 2 + 2];
    let best = tree.distance(e).unwrap();
    assert_eq!(best, 6);
    assert!(route_weights.iter().all(|&weight| best <= weight));
    assert_eq!(tree.predecessor(e), store.actor_id("D"));
}

#[test]
fn test_dijkstra_leaves_other_components_unknown() {
    let store = build_store(&[
        ("A", "Together", 2000),
        ("B", "Together", 2000),
        ("Z", "Elsewhere", 2000),
        ("Y", "Elsewhere", 2000),
    ]);
    let edges = EdgeSet::full(&store);
    let tree = dijkstra_search(Network::new(&store, &edges), store.actor_id("A").unwrap());
    let z = store.actor_id("Z").unwrap();

    assert_eq!(tree.distance(z), None);
    assert!(!tree.is_visited(z));
    assert_eq!(tree.visited_count(), 2);
}
