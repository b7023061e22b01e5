use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Graph;
use crate::errors::RouteError;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// On-disk layout of a map file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl MapData {

    /// Build a graph, nodes first so edges may reference any node in the file
    pub fn into_graph(self) -> Result<Graph, RouteError> {
        let mut graph = Graph::new();
        for node in self.nodes {
            graph.add_node(node.id, node.name, node.x, node.y);
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance)?;
        }
        Ok(graph)
    }
}

impl From<&Graph> for MapData {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id.clone(),
                name: node.name.clone(),
                x: node.position.x,
                y: node.position.y,
            })
            .collect();
        let edges = graph
            .edges()
            .into_iter()
            .map(|(from, to, distance)| EdgeRecord {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            })
            .collect();

        Self { nodes, edges }
    }
}


/// Read a map file into a new graph
///
/// ```json
/// {
///   "nodes": [{ "id": "factory", "name": "Clock Tower Factory", "x": 0, "y": 0 }],
///   "edges": [{ "from": "factory", "to": "warehouse_prem", "distance": 4.5 }]
/// }
/// ```
///
/// Missing `nodes` or `edges` arrays count as empty. Any other structural
/// problem, or an edge naming an unknown node, rejects the whole file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Graph, RouteError> {
    let path = path.as_ref();
    let malformed = |reason: String| RouteError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| malformed(e.to_string()))?;
    let data: MapData = serde_json::from_str(&text).map_err(|e| malformed(e.to_string()))?;
    let graph = data.into_graph().map_err(|e| malformed(e.to_string()))?;

    debug!(path = %path.display(), nodes = graph.len(), edges = graph.edge_count(), "map loaded");
    Ok(graph)
}

/// Write a graph in the layout `load_json` reads
pub fn save_json(graph: &Graph, path: impl AsRef<Path>) -> Result<(), RouteError> {
    let path = path.as_ref();
    let malformed = |reason: String| RouteError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };

    let text = serde_json::to_string_pretty(&MapData::from(graph)).map_err(|e| malformed(e.to_string()))?;
    fs::write(path, text).map_err(|e| malformed(e.to_string()))?;

    debug!(path = %path.display(), nodes = graph.len(), edges = graph.edge_count(), "map saved");
    Ok(())
}

/// Parse map data held in memory
pub fn from_json_str(text: &str) -> Result<Graph, RouteError> {
    let data: MapData = serde_json::from_str(text).map_err(|e| RouteError::MalformedInput {
        path: "<memory>".into(),
        reason: e.to_string(),
    })?;
    data.into_graph()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MAP: &str = r#"{
        "nodes": [
            { "id": "hub", "name": "Central Hub", "x": 0, "y": 0 },
            { "id": "north", "name": "North Depot", "x": 0, "y": 10 }
        ],
        "edges": [
            { "from": "hub", "to": "north", "distance": 12.5 }
        ]
    }"#;

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAP.as_bytes()).unwrap();

        let graph = load_json(file.path()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node("north").unwrap().name, "North Depot");
        assert_eq!(graph.edge_weight("north", "hub"), Some(12.5));
    }

    #[test]
    fn test_saved_map_loads_back() {
        let mut graph = crate::network::builtin::default_network();
        graph.add_node("isolated", "Isolated Yard", 100.0, -0.5);
        graph.add_edge("warehouse_prem", "warehouse_raipur", 7.25).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        save_json(&graph, &path).unwrap();
        let loaded = load_json(&path).unwrap();

        assert_eq!(MapData::from(&loaded), MapData::from(&graph));
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded.edge_count(), 7);
        assert_eq!(loaded.node("isolated").unwrap().position.y, -0.5);
        assert_eq!(loaded.edge_weight("warehouse_raipur", "warehouse_prem"), Some(7.25));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_json(&Graph::new(), dir.path().join("missing").join("map.json"));
        assert!(matches!(result, Err(RouteError::MalformedInput { .. })));
    }

    #[test]
    fn test_missing_arrays_are_empty() {
        let graph = from_json_str(r#"{ "nodes": [{ "id": "a", "name": "A", "x": 1, "y": 2 }] }"#).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);

        assert!(from_json_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_json(dir.path().join("map_data.json"));
        assert!(matches!(result, Err(RouteError::MalformedInput { .. })));
    }

    #[test]
    fn test_invalid_json_is_malformed_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"nodes\": [ { \"id\": 3 } ] }").unwrap();
        assert!(matches!(load_json(file.path()), Err(RouteError::MalformedInput { .. })));
    }

    #[test]
    fn test_dangling_edge_rejects_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "nodes": [], "edges": [{ "from": "a", "to": "b", "distance": 1 }] }"#).unwrap();

        match load_json(file.path()) {
            Err(RouteError::MalformedInput { reason, .. }) => assert!(reason.contains("unknown node: a")),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_edge_from_str() {
        let result = from_json_str(r#"{ "edges": [{ "from": "a", "to": "b", "distance": 1 }] }"#);
        assert_eq!(result.unwrap_err(), RouteError::DanglingEdgeReference("a".into()));
    }
}
