use super::utils::{Network, SearchTree};
use crate::store::{ActorId, EntityStore, MovieId};
use std::fmt::Write;

/// Legend written above rendered paths.
pub const PATH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPath {
    /// Root first, target last
    pub actors: Vec<ActorId>,
    /// `movies[i]` links `actors[i]` and `actors[i + 1]`
    pub movies: Vec<MovieId>,
}

impl ConnectionPath {
    pub fn hop_count(&self) -> usize {
        self.movies.len()
    }
}

/// Walks predecessors from `target` back to the tree root and resolves the
/// movie cited for every step. Returns `None` if `target` is not connected to
/// the root.
pub fn reconstruct_path(
    network: Network<'_>,
    tree: &SearchTree,
    target: ActorId,
) -> Option<ConnectionPath> {
    if !tree.reaches_root(target) {
        return None;
    }

    let mut stack = vec![target];
    let mut current = target;
    while let Some(previous) = tree.predecessor(current) {
        stack.push(previous);
        current = previous;
    }

    let mut actors = Vec::with_capacity(stack.len());
    while let Some(actor) = stack.pop() {
        actors.push(actor);
    }

    let movies = actors
        .windows(2)
        .map(|pair| common_movie(network.store, pair[0], pair[1]))
        .collect::<Option<Vec<_>>>()?;

    Some(ConnectionPath { actors, movies })
}

/// The shared movie to cite between two actors: latest release year, then the
/// title that sorts last.
pub fn common_movie(store: &EntityStore, actor: ActorId, other: ActorId) -> Option<MovieId> {
    let first = sorted_movies(store, actor);
    let second = sorted_movies(store, other);

    intersect_sorted(&first, &second)
        .into_iter()
        .max_by(|&a, &b| {
            let (a, b) = (store.movie(a), store.movie(b));
            a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title))
        })
}

fn sorted_movies(store: &EntityStore, actor: ActorId) -> Vec<MovieId> {
    let mut movies = store.actor(actor).movies.clone();
    movies.sort_unstable();
    movies.dedup();
    movies
}

fn intersect_sorted(first: &[MovieId], second: &[MovieId]) -> Vec<MovieId> {
    let mut shared = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        match first[i].cmp(&second[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared.push(first[i]);
                i += 1;
                j += 1;
            }
        }
    }

    shared
}

/// Formats a path as `(A)--[Title#@Year]-->(B)--...`.
pub fn render_path(store: &EntityStore, path: &ConnectionPath) -> String {
    let mut rendered = String::new();

    for (step, &actor) in path.actors.iter().enumerate() {
        if step > 0 {
            let movie = store.movie(path.movies[step - 1]);
            let _ = write!(rendered, "--[{}#@{}]-->", movie.title, movie.year);
        }
        let _ = write!(rendered, "({})", store.actor_name(actor));
    }

    rendered
}
