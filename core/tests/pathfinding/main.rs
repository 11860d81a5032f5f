mod dijkstra;

use castpath_core::EntityStore;

fn build_store(records: &[(&str, &str, i32)]) -> EntityStore {
    let mut store = EntityStore::new();
    for &(actor, title, year) in records {
        store.ingest(actor, title, year);
    }
    store
}

/// A and B share Movie1 (2010), B and C share Movie2 (2012).
fn chain_store() -> EntityStore {
    build_store(&[
        ("A", "Movie1", 2010),
        ("B", "Movie1", 2010),
        ("B", "Movie2", 2012),
        ("C", "Movie2", 2012),
    ])
}

/// A reaches D directly through an old movie, or in two hops through recent ones.
fn shortcut_store() -> EntityStore {
    build_store(&[
        ("A", "Old", 1950),
        ("D", "Old", 1950),
        ("A", "New1", 2014),
        ("B", "New1", 2014),
        ("B", "New2", 2014),
        ("D", "New2", 2014),
    ])
}

/// B and C tie at every step on the way from A to D.
fn tie_store() -> EntityStore {
    build_store(&[
        ("A", "M1", 2010),
        ("B", "M1", 2010),
        ("C", "M1", 2010),
        ("B", "M2", 2010),
        ("D", "M2", 2010),
        ("C", "M3", 2010),
        ("D", "M3", 2010),
    ])
}
