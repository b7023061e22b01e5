pub mod builtin;
pub mod loader;

use crate::collections::FxIndexMap;
use crate::errors::RouteError;
use crate::geometry::Point;

use std::cmp::Ordering;

use tracing::debug;


/// A named location in the network
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub position: Point,
}

impl Node {

    /// Straight-line distance between two locations, the A* heuristic
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance_to(&other.position)
    }
}


/// One direction of an undirected edge as stored in the adjacency list
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub id: String,
    pub distance: f64,
}


/// Edge whose distance is shorter than the straight line between its endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct InadmissibleEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub straight_line: f64,
}


/// Undirected weighted graph of named locations
///
/// Every id present in the adjacency list has a node record and every edge is
/// stored once per direction. Nodes and edges keep their insertion order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<String, Node>,
    adjacency: FxIndexMap<String, Vec<Neighbor>>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location, replacing any previous record with the same id
    /// Edges already attached to the id are kept
    pub fn add_node(&mut self, id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) {
        let id = id.into();
        let node = Node {
            id: id.clone(),
            name: name.into(),
            position: Point::new(x, y),
        };

        if let Some(previous) = self.nodes.insert(id.clone(), node) {
            debug!(id = %previous.id, old_name = %previous.name, "node redefined");
        }
        self.adjacency.entry(id).or_default();
    }

    /// Connect two known locations in both directions
    /// Parallel edges are kept; the solvers pick the cheaper one
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<(), RouteError> {
        for id in [from, to] {
            if !self.nodes.contains_key(id) {
                return Err(RouteError::DanglingEdgeReference(id.to_string()));
            }
        }

        // negative or NaN distances break both solvers
        if distance.is_nan() || distance < 0.0 {
            return Err(RouteError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        }

        self.adjacency.entry(from.to_string()).or_default().push(Neighbor {
            id: to.to_string(),
            distance,
        });
        self.adjacency.entry(to.to_string()).or_default().push(Neighbor {
            id: from.to_string(),
            distance,
        });

        debug!(from, to, distance, "edge added");
        Ok(())
    }

    /// Straight-line distance between two locations, `None` if either is unknown
    pub fn distance_between(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.nodes.get(a)?.distance_to(self.nodes.get(b)?))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All locations in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Adjacency list of a location, empty for unknown ids
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Cheapest direct edge between two locations
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|n| n.id == to)
            .map(|n| n.distance)
            .min_by(f64::total_cmp)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Edges that would let the straight-line heuristic overestimate
    /// A* results stay optimal only while this is empty
    pub fn inadmissible_edges(&self) -> Vec<InadmissibleEdge> {
        self.edges()
            .into_iter()
            .filter_map(|(from, to, distance)| {
                let straight_line = self.distance_between(from, to)?;
                (distance < straight_line).then(|| InadmissibleEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                    straight_line,
                })
            })
            .collect()
    }

    /// Every undirected edge once as `(from, to, distance)`, parallel edges included
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        let mut edges = Vec::new();

        for (from, neighbors) in &self.adjacency {
            let mut loops = 0;
            for neighbor in neighbors {
                // both directions are stored, keep the one with the smaller id first
                let keep = match from.as_str().cmp(neighbor.id.as_str()) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => {
                        loops += 1;
                        loops % 2 == 1
                    }
                };
                if keep {
                    edges.push((from.as_str(), neighbor.id.as_str(), neighbor.distance));
                }
            }
        }

        edges
    }
}
