use super::Graph;
use crate::errors::RouteError;


/// Identifier of the factory in the built-in network
pub const FACTORY: &str = "factory";

const LOCATIONS: [(&str, &str, f64, f64); 4] = [
    (FACTORY, "Clock Tower Factory", 0.0, 0.0),
    ("warehouse_clement", "Clement Town Warehouse", 5.0, 3.0),
    ("warehouse_prem", "Prem Nagar Warehouse", -4.0, 2.0),
    ("warehouse_raipur", "Raipur Warehouse", 2.0, -6.0),
];

const ROADS: [(&str, &str, f64); 6] = [
    // factory to warehouses
    (FACTORY, "warehouse_clement", 6.0),
    (FACTORY, "warehouse_prem", 4.5),
    (FACTORY, "warehouse_raipur", 6.3),
    // between warehouses
    ("warehouse_clement", "warehouse_prem", 9.2),
    ("warehouse_clement", "warehouse_raipur", 9.4),
    ("warehouse_prem", "warehouse_raipur", 8.1),
];


/// Small factory/warehouse network used when no map file is available
pub fn default_network() -> Graph {
    let mut graph = Graph::new();
    // every road endpoint is in LOCATIONS and every distance is positive
    populate(&mut graph).unwrap_or_else(|e| tracing::error!(error = %e, "built-in network is inconsistent"));
    graph
}

fn populate(graph: &mut Graph) -> Result<(), RouteError> {
    for (id, name, x, y) in LOCATIONS {
        graph.add_node(id, name, x, y);
    }
    for (from, to, distance) in ROADS {
        graph.add_edge(from, to, distance)?;
    }
    Ok(())
}
