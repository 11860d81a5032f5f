use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    /// One entry per ingested record, in ingestion order
    pub movies: Vec<MovieId>,
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    /// Keyed by actor name so that cast iteration order is stable
    pub cast: BTreeMap<String, ActorId>,
}

type ActorIndex = FxHashMap<String, ActorId>;
type MovieIndex = FxHashMap<(String, i32), MovieId>;

/// Arena of every actor and movie seen during ingestion.
///
/// Ids handed out by the store stay valid for its whole lifetime; nothing is
/// ever removed.
#[derive(Debug, Default)]
pub struct EntityStore {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: ActorIndex,
    movie_index: MovieIndex,
    movies_by_year: BTreeMap<i32, Vec<MovieId>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, actor_name: &str, movie_title: &str, movie_year: i32) {
        let actor_id = self.upsert_actor(actor_name);
        let movie_id = self.upsert_movie(movie_title, movie_year);

        self.movies[movie_id.0]
            .cast
            .insert(actor_name.to_string(), actor_id);
        self.actors[actor_id.0].movies.push(movie_id);
    }

    fn upsert_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_index.get(name) {
            return id;
        }

        let id = ActorId(self.actors.len());
        self.actors.push(Actor {
            name: name.to_string(),
            movies: Vec::new(),
        });
        self.actor_index.insert(name.to_string(), id);
        id
    }

    fn upsert_movie(&mut self, title: &str, year: i32) -> MovieId {
        let key = (title.to_string(), year);
        if let Some(&id) = self.movie_index.get(&key) {
            return id;
        }

        let id = MovieId(self.movies.len());
        self.movies.push(Movie {
            title: title.to_string(),
            year,
            cast: BTreeMap::new(),
        });
        self.movie_index.insert(key, id);
        self.movies_by_year.entry(year).or_default().push(id);
        id
    }

    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actor_index.get(name).copied()
    }

    pub fn movie_id(&self, title: &str, year: i32) -> Option<MovieId> {
        self.movie_index.get(&(title.to_string(), year)).copied()
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn movie(&self, id: MovieId) -> &Movie {
        &self.movies[id.0]
    }

    pub fn actor_name(&self, id: ActorId) -> &str {
        &self.actors[id.0].name
    }

    /// Release year of the earliest movie `id` appears in.
    pub fn debut_year(&self, id: ActorId) -> Option<i32> {
        self.actor(id)
            .movies
            .iter()
            .map(|&movie| self.movie(movie).year)
            .min()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn movies(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.movies
            .iter()
            .enumerate()
            .map(|(index, movie)| (MovieId(index), movie))
    }

    /// Movies grouped by release year, earliest year first
    pub fn movies_by_year(&self) -> &BTreeMap<i32, Vec<MovieId>> {
        &self.movies_by_year
    }
}
