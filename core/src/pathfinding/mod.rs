pub mod bfs;
pub mod dijkstra;
pub mod reconstruct;
pub mod utils;

pub use bfs::bfs_search;
pub use dijkstra::dijkstra_search;
pub use reconstruct::{ConnectionPath, PATH_HEADER, common_movie, reconstruct_path, render_path};
pub use utils::{Network, SearchTree};

use crate::search_mode::SearchMode;
use crate::store::ActorId;

/// Runs the search that matches `mode` from `start`.
pub fn search(network: Network<'_>, start: ActorId, mode: SearchMode) -> SearchTree {
    match mode {
        SearchMode::Unweighted => bfs_search(network, start),
        SearchMode::Weighted => dijkstra_search(network, start),
    }
}
