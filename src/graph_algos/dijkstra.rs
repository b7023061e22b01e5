use crate::errors::PathPlannerError;
use super::{shortest_path, GraphNodeMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => shortest_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Return a partial map of the graph up to the goal node
/// Nodes with lower cost than the goal node will be included
pub fn dijkstra_nodes_partial<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    build_dijkstra_graph(start, neighbors, goal).0
}

/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    build_dijkstra_graph(start, neighbors, |_| false).0
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // NodeId reverses the ordering so the least costly node is expanded first
    // Superseded entries stay in the heap and are filtered on pop
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to NO_PARENT to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Stale entry - a cheaper path to this node was already recorded
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        let node = node.clone();

        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        trace!(neighbor = ?e.key(), from = ?node, cost = ?new_cost, "relaxed");
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is at least as good
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    (nodes_map, None)
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use ordered_float::OrderedFloat;

    // Undirected diamond: A - B - D and A - C - D
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph: HashMap<String, Vec<(String, u32)>> = HashMap::new();
        for (a, b, w) in [("A", "B", 1), ("A", "C", 3), ("B", "D", 5), ("C", "D", 1)] {
            graph.entry(a.to_string()).or_default().push((b.to_string(), w));
            graph.entry(b.to_string()).or_default().push((a.to_string(), w));
        }
        graph
    }

    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_build_dijkstra_graph_simple() {
        let graph = create_test_graph();
        let (result, goal) = build_dijkstra_graph(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node| node == "D"
        );

        assert!(goal.is_some());
        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();

        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 3);
        assert_eq!(costs["D"], 4); // A->C->D beats A->B->D
    }

    #[test]
    fn test_build_dijkstra_graph_with_cycle() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let (result, _) = build_dijkstra_graph("A".to_string(), create_neighbor_fn(&graph), |node| node == "D");

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();
        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 2);
        assert_eq!(costs["D"], 4);
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();
        let path = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D").unwrap();
        assert_eq!(path, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_start_is_goal() {
        let graph = create_test_graph();
        let path = dijkstra("B".to_string(), create_neighbor_fn(&graph), |node| node == "B").unwrap();
        assert_eq!(path, vec!["B"]);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("A".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let result = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D");
        assert_eq!(result, Err(PathPlannerError::NoPathFound));
    }

    #[test]
    fn test_dijkstra_nodes_partial_stops_at_goal() {
        // A -> B -> D (cost 2) is the shortest path to goal
        // A -> C -> E/F -> G/H are high-cost paths that shouldn't be explored
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 10)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("E".to_string(), 5), ("F".to_string(), 20)]);
        graph.insert("E".to_string(), vec![("G".to_string(), 5)]);
        graph.insert("F".to_string(), vec![("H".to_string(), 1)]);

        let node_map = dijkstra_nodes_partial("A".to_string(), create_neighbor_fn(&graph), |node| node == "D");

        for node in ["A", "B", "C", "D"] {
            assert!(node_map.contains_key(node), "Node {node} should be explored");
        }
        for node in ["E", "F", "G", "H"] {
            assert!(!node_map.contains_key(node), "Node {node} should not be explored");
        }
        assert_eq!(node_map["D"].1, 2);
    }

    #[test]
    fn test_dijkstra_nodes_full_reaches_everything_connected() {
        let graph = create_test_graph();
        let node_map = dijkstra_nodes_full("B".to_string(), create_neighbor_fn(&graph));
        assert_eq!(node_map.len(), 4);
        assert_eq!(node_map["A"].1, 1);
        assert_eq!(node_map["C"].1, 4);
        assert_eq!(node_map["D"].1, 5);
    }

    #[test]
    fn test_dijkstra_float_costs_prefer_cheaper_duplicate_edge() {
        // two parallel edges between the same pair, the cheaper one must win
        let adjacency: HashMap<&str, Vec<(&str, OrderedFloat<f64>)>> = HashMap::from([
            ("x", vec![("y", OrderedFloat(2.5)), ("y", OrderedFloat(1.25))]),
            ("y", vec![("x", OrderedFloat(2.5)), ("x", OrderedFloat(1.25))]),
        ]);
        let node_map = dijkstra_nodes_full("x", |n: &&str| adjacency[n].clone());
        assert_eq!(node_map["y"].1, OrderedFloat(1.25));
    }
}
