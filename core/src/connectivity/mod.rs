pub mod bfs;
pub mod union_find;

pub use bfs::first_year_by_bfs;
pub use union_find::{ComponentForest, first_year_by_union_find};

use crate::search_mode::{ConnectivityStrategy, NEVER_CONNECTED_YEAR};
use crate::store::EntityStore;
use tracing::warn;

/// Earliest release year by which `actor_a` and `actor_b` share a component,
/// counting only movies from that year or before. `None` when they never do,
/// including when either name is missing from the store. An actor is connected
/// to themself from the year of their first movie.
pub fn first_connected_year(
    store: &EntityStore,
    actor_a: &str,
    actor_b: &str,
    strategy: ConnectivityStrategy,
) -> Option<i32> {
    let (Some(start), Some(end)) = (store.actor_id(actor_a), store.actor_id(actor_b)) else {
        warn!(actor_a, actor_b, "connectivity query names an unknown actor");
        return None;
    };

    match strategy {
        ConnectivityStrategy::Bfs => first_year_by_bfs(store, start, end),
        ConnectivityStrategy::UnionFind => first_year_by_union_find(store, start, end),
    }
}

/// The year column written for a connectivity result.
pub fn report_year(year: Option<i32>) -> i32 {
    year.unwrap_or(NEVER_CONNECTED_YEAR)
}
