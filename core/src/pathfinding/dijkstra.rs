use super::utils::{Network, SearchTree};
use crate::store::ActorId;
use std::{cmp::Ordering, collections::BinaryHeap};

struct FrontierEntry<'a> {
    distance: i64,
    name: &'a str,
    actor: ActorId,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry: smallest distance first, and on
        // equal distances the name that sorts last.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| self.actor.cmp(&other.actor))
    }
}

struct DijkstraState<'a> {
    heap: BinaryHeap<FrontierEntry<'a>>,
    tree: SearchTree,
    network: Network<'a>,
}

impl<'a> DijkstraState<'a> {
    fn new(network: Network<'a>, start: ActorId) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            distance: 0,
            name: network.store.actor_name(start),
            actor: start,
        });

        Self {
            heap,
            tree: SearchTree::new(network.actor_count(), start),
            network,
        }
    }

    fn visit_neighbor(&mut self, neighbor: ActorId, current: ActorId, candidate: i64) {
        if self.tree.is_visited(neighbor) {
            return;
        }

        if let Some(existing) = self.tree.distance(neighbor) {
            if candidate >= existing {
                return;
            }
        }

        self.tree.record(neighbor, current, candidate);
        self.heap.push(FrontierEntry {
            distance: candidate,
            name: self.network.store.actor_name(neighbor),
            actor: neighbor,
        });
    }
}

/// Weighted shortest paths from `start` over edge weights. Entries for actors
/// that were already finalized are dropped when they surface in the heap.
pub fn dijkstra_search(network: Network<'_>, start: ActorId) -> SearchTree {
    let mut dijkstra_state = DijkstraState::new(network, start);

    while let Some(FrontierEntry {
        actor: current_actor,
        ..
    }) = dijkstra_state.heap.pop()
    {
        if dijkstra_state.tree.is_visited(current_actor) {
            continue;
        }
        dijkstra_state.tree.mark_visited(current_actor);

        let current_distance = dijkstra_state.tree.distance(current_actor).unwrap_or(0);

        for edge in network.edges.neighbors(current_actor) {
            let candidate = current_distance + edge.weight;
            dijkstra_state.visit_neighbor(edge.other, current_actor, candidate);
        }
    }

    dijkstra_state.tree
}
