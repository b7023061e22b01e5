use crate::errors::PathPlannerError;
use crate::collections::FxHashSet;
use super::{shortest_path, GraphNodeMap, NO_PARENT};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// Node on A* graph
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}
impl<T: PartialEq> Eq for Node<T> {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The returned path is optimal when the heuristic is admissible
    /// (never overestimates the true cost to reach the goal). This is a
    /// precondition on the caller's data and is not checked here.
    /// An expanded node is reopened when a cheaper path to it turns up, so the
    /// heuristic does not also need to be consistent.
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Vec<N>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn);

        match goal_index {
            Some(goal_index) => shortest_path(&node_map, goal_index),
            None => Err(PathPlannerError::NoPathFound)
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C,
        G: Fn(&N) -> bool
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

        // Best known cost and parent for every discovered node
        // for the start node, parent_index is set to NO_PARENT to indicate it has no parent
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

        // Indices of expanded nodes, removed again when a node is reopened
        let mut finalized: FxHashSet<usize> = FxHashSet::default();

        let start_f = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_list.push(Node {
            index: start_index,
            cost: Zero::zero(),
            f_cost: start_f,
        });

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            if finalized.contains(&index) {
                continue;
            }

            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // Stale entry - superseded by a cheaper push for the same node
            if cost > c {
                continue;
            }

            if goal_fn(node) {
                return (closed_list, Some(index));
            }

            finalized.insert(index);
            let node = node.clone();

            for (neighbor, edge_cost) in neighbors(&node) {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = edge_cost + c;

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if e.get().1 <= new_cost {
                            continue;
                        }
                        if finalized.remove(&e.index()) {
                            trace!(neighbor = ?e.key(), cost = ?new_cost, "reopened");
                        }
                        trace!(neighbor = ?e.key(), from = ?node, cost = ?new_cost, "relaxed");
                        e.insert((index, new_cost));
                        e.index()
                    }
                };

                let h_cost = match closed_list.get_index(neighbor_index) {
                    Some((n, _)) => heuristic_fn(n),
                    None => Zero::zero(),
                };

                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + h_cost,
                });
            }
        }

        (closed_list, None)
    }
}
