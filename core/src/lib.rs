pub mod connectivity;
pub mod edges;
pub mod error;
pub mod parsing;
pub mod pathfinding;
pub mod search_mode;
pub mod store;

// Re-export commonly used items
pub use connectivity::{first_connected_year, report_year};
pub use edges::{Edge, EdgeSet, recency_weight};
pub use error::LoadError;
pub use parsing::{IngestStats, PairQuery, load_cast_file, read_pair_queries};
pub use pathfinding::{
    ConnectionPath, Network, PATH_HEADER, SearchTree, bfs_search, dijkstra_search,
    reconstruct_path, render_path, search,
};
pub use search_mode::{ConnectivityStrategy, NEVER_CONNECTED_YEAR, REFERENCE_YEAR, SearchMode};
pub use store::{Actor, ActorId, EntityStore, Movie, MovieId};
