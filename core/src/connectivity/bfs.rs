use crate::edges::EdgeSet;
use crate::pathfinding::{Network, bfs_search};
use crate::store::{ActorId, EntityStore};

/// Grows a fresh edge set one release year at a time and searches it from
/// `start` after each year.
pub fn first_year_by_bfs(store: &EntityStore, start: ActorId, end: ActorId) -> Option<i32> {
    if start == end {
        return store.debut_year(start);
    }

    let mut edges = EdgeSet::new(store.actor_count());

    for (&year, movies) in store.movies_by_year() {
        edges.add_movies(store, movies);

        let tree = bfs_search(Network::new(store, &edges), start);
        if tree.reaches_root(end) {
            return Some(year);
        }
    }

    None
}
