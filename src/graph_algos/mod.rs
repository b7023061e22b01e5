pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use shortest_path::shortest_path;

use ordered_float::OrderedFloat;

use crate::collections::FxIndexMap;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
/// This is the search trace: tentative distances and came-from links in one map
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Sentinel parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Totally ordered travel distance, so float costs satisfy the `Ord` bound of the solvers
pub type Cost = OrderedFloat<f64>;
