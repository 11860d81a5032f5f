use crate::store::{ActorId, EntityStore};

/// Disjoint-set forest over actor ids with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct ComponentForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl ComponentForest {
    pub fn new(actor_count: usize) -> Self {
        Self {
            parent: (0..actor_count).collect(),
            rank: vec![0; actor_count],
        }
    }

    pub fn find(&mut self, actor: ActorId) -> ActorId {
        let mut root = actor.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = actor.0;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        ActorId(root)
    }

    /// Returns `false` when both actors were already in the same component.
    pub fn union(&mut self, actor: ActorId, other: ActorId) -> bool {
        let (root, other_root) = (self.find(actor).0, self.find(other).0);
        if root == other_root {
            return false;
        }

        match self.rank[root].cmp(&self.rank[other_root]) {
            std::cmp::Ordering::Less => self.parent[root] = other_root,
            std::cmp::Ordering::Greater => self.parent[other_root] = root,
            std::cmp::Ordering::Equal => {
                self.parent[other_root] = root;
                self.rank[root] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, actor: ActorId, other: ActorId) -> bool {
        self.find(actor) == self.find(other)
    }
}

/// Merges every cast year by year and reports the first year after which
/// `start` and `end` share a representative.
pub fn first_year_by_union_find(store: &EntityStore, start: ActorId, end: ActorId) -> Option<i32> {
    if start == end {
        return store.debut_year(start);
    }

    let mut forest = ComponentForest::new(store.actor_count());

    for (&year, movies) in store.movies_by_year() {
        for &movie_id in movies {
            let mut cast = store.movie(movie_id).cast.values().copied();
            if let Some(first) = cast.next() {
                for member in cast {
                    forest.union(first, member);
                }
            }
        }

        if forest.connected(start, end) {
            return Some(year);
        }
    }

    None
}
