use crate::errors::PathPlannerError;
use super::{GraphNodeMap, NO_PARENT};

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
///
/// Solvers only hand over a goal index once the goal has been popped, so a goal
/// that was never reached does not get here and a goal equal to the start yields `[start]`
pub fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{

    if goal_index >= node_map.len() {
        return Err(PathPlannerError::GoalFailure);
    }

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(PathPlannerError::NoPathFound),
        }

        // a parent chain longer than the map means the trace has a cycle
        if path.len() > node_map.len() {
            return Err(PathPlannerError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn trace() -> GraphNodeMap<&'static str, u32> {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        let a = node_map.insert_full("A", (NO_PARENT, 0)).0;
        let _b = node_map.insert_full("B", (a, 1)).0;
        let c = node_map.insert_full("C", (a, 3)).0;
        node_map.insert_full("D", (c, 4));
        node_map
    }

    #[test]
    fn test_reconstruct_orders_start_to_goal() {
        let node_map = trace();
        assert_eq!(shortest_path(&node_map, 3).unwrap(), vec!["A", "C", "D"]);
        assert_eq!(shortest_path(&node_map, 1).unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_reconstruct_start_is_single_node() {
        let node_map = trace();
        assert_eq!(shortest_path(&node_map, 0).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_unknown_goal_index() {
        let node_map = trace();
        assert_eq!(shortest_path(&node_map, 42), Err(PathPlannerError::GoalFailure));
    }

    #[test]
    fn test_reconstruct_rejects_cyclic_trace() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        node_map.insert("A", (1, 0));
        node_map.insert("B", (0, 1));
        assert_eq!(shortest_path(&node_map, 1), Err(PathPlannerError::NoPathFound));
    }
}
