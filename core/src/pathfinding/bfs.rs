use super::utils::{Network, SearchTree};
use crate::store::ActorId;
use std::collections::VecDeque;

struct BfsState {
    queue: VecDeque<ActorId>,
    tree: SearchTree,
}

impl BfsState {
    fn new(start: ActorId, actor_count: usize) -> Self {
        let mut queue = VecDeque::new();
        let mut tree = SearchTree::new(actor_count, start);

        queue.push_back(start);
        tree.mark_visited(start);

        Self { queue, tree }
    }

    fn visit_neighbor(&mut self, neighbor: ActorId, current: ActorId, hops: i64) {
        if !self.tree.is_visited(neighbor) {
            self.tree.mark_visited(neighbor);
            self.tree.record(neighbor, current, hops);
            self.queue.push_back(neighbor);
        }
    }
}

/// Explores the whole component of `start` in level order. Distances in the
/// returned tree are hop counts.
pub fn bfs_search(network: Network<'_>, start: ActorId) -> SearchTree {
    let mut bfs_state = BfsState::new(start, network.actor_count());

    while let Some(current_actor) = bfs_state.queue.pop_front() {
        let hops = bfs_state.tree.distance(current_actor).unwrap_or(0) + 1;

        for edge in network.edges.neighbors(current_actor) {
            bfs_state.visit_neighbor(edge.other, current_actor, hops);
        }
    }

    bfs_state.tree
}
