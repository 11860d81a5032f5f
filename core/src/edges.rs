use crate::search_mode::REFERENCE_YEAR;
use crate::store::{ActorId, EntityStore, MovieId};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub movie: MovieId,
    pub actor: ActorId,
    pub other: ActorId,
    pub weight: i64,
}

/// Weight of an edge created from a movie released in `year`. Computed in
/// `i64` so that every `i32` year yields an exact weight.
pub fn recency_weight(year: i32) -> i64 {
    i64::from(REFERENCE_YEAR) - i64::from(year) + 1
}

/// Adjacency lists for every actor in a store, indexed by `ActorId`.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl EdgeSet {
    pub fn new(actor_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); actor_count],
            edge_count: 0,
        }
    }

    /// Edges for every movie in the store, weighted by release recency.
    pub fn full(store: &EntityStore) -> Self {
        let mut edges = Self::new(store.actor_count());

        for (movie_id, movie) in store.movies() {
            edges.connect_cast(store, movie_id, recency_weight(movie.year));
        }

        info!(
            actors = store.actor_count(),
            movies = store.movie_count(),
            edges = edges.edge_count,
            "built full edge set"
        );
        edges
    }

    /// Adds unit-weight edges for `movies` on top of whatever is already present.
    pub fn add_movies(&mut self, store: &EntityStore, movies: &[MovieId]) {
        for &movie_id in movies {
            self.connect_cast(store, movie_id, 1);
        }
    }

    fn connect_cast(&mut self, store: &EntityStore, movie_id: MovieId, weight: i64) {
        let cast = &store.movie(movie_id).cast;

        for &actor in cast.values() {
            for &other in cast.values() {
                if actor == other {
                    continue;
                }
                self.adjacency[actor.0].push(Edge {
                    movie: movie_id,
                    actor,
                    other,
                    weight,
                });
                self.edge_count += 1;
            }
        }
    }

    pub fn neighbors(&self, actor: ActorId) -> &[Edge] {
        self.adjacency
            .get(actor.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        self.edge_count = 0;
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
