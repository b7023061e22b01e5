//! Shortest-path routing over logistics networks
//!
//! Build a [`Graph`] of factories and warehouses, then ask for a route with
//! Dijkstra or A*:
//!
//! ```
//! use freightpath::{Algorithm, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node("factory", "Clock Tower Factory", 0.0, 0.0);
//! graph.add_node("warehouse_prem", "Prem Nagar Warehouse", -4.0, 2.0);
//! graph.add_edge("factory", "warehouse_prem", 4.5).unwrap();
//!
//! let route = graph.route("factory", "warehouse_prem", Algorithm::AStar).unwrap();
//! assert_eq!(route.nodes, ["factory", "warehouse_prem"]);
//! assert_eq!(route.distance, 4.5);
//! ```

pub mod collections;
pub mod delivery;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod logging;
pub mod network;
pub mod report;
pub mod routing;

pub use delivery::{DeliveryLeg, DeliveryPlan};
pub use errors::{PathPlannerError, RouteError};
pub use network::Graph;
pub use report::RouteReport;
pub use routing::{find_path_a_star, shortest_path, Algorithm, Path, Route};
