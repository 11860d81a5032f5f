use crate::edges::EdgeSet;
use crate::store::{ActorId, EntityStore};

/// Read-only view of the graph a query runs against: the entities plus the
/// edge set built for the current mode.
#[derive(Debug, Clone, Copy)]
pub struct Network<'a> {
    pub store: &'a EntityStore,
    pub edges: &'a EdgeSet,
}

impl<'a> Network<'a> {
    pub fn new(store: &'a EntityStore, edges: &'a EdgeSet) -> Self {
        Self { store, edges }
    }

    pub fn actor_count(&self) -> usize {
        self.store.actor_count()
    }
}

/// Predecessor tree produced by a single search from `root`.
///
/// Every search builds a new tree, so no traversal state survives between
/// queries.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: ActorId,
    visited: Vec<bool>,
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<ActorId>>,
    visited_count: usize,
}

impl SearchTree {
    pub fn new(actor_count: usize, root: ActorId) -> Self {
        let mut distances = vec![None; actor_count];
        distances[root.0] = Some(0);

        Self {
            root,
            visited: vec![false; actor_count],
            distances,
            predecessors: vec![None; actor_count],
            visited_count: 0,
        }
    }

    pub fn root(&self) -> ActorId {
        self.root
    }

    pub fn is_visited(&self, actor: ActorId) -> bool {
        self.visited[actor.0]
    }

    /// `None` while the actor's distance is unknown
    pub fn distance(&self, actor: ActorId) -> Option<i64> {
        self.distances[actor.0]
    }

    pub fn predecessor(&self, actor: ActorId) -> Option<ActorId> {
        self.predecessors[actor.0]
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Whether following predecessors from `target` ends at the root.
    pub fn reaches_root(&self, target: ActorId) -> bool {
        let mut current = target;
        while let Some(previous) = self.predecessors[current.0] {
            current = previous;
        }
        current == self.root
    }

    pub(crate) fn mark_visited(&mut self, actor: ActorId) {
        if !self.visited[actor.0] {
            self.visited[actor.0] = true;
            self.visited_count += 1;
        }
    }

    pub(crate) fn record(&mut self, actor: ActorId, previous: ActorId, distance: i64) {
        self.predecessors[actor.0] = Some(previous);
        self.distances[actor.0] = Some(distance);
    }
}
