use std::fmt;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::errors::{PathPlannerError, RouteError};
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::dijkstra::{dijkstra, dijkstra_nodes_full};
use crate::graph_algos::Cost;
use crate::network::{Graph, Node};


/// Ordered node ids from start to end inclusive, empty when there is no route
pub type Path = Vec<String>;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra's Shortest Path"),
            Algorithm::AStar => write!(f, "A* Pathfinding"),
        }
    }
}


/// A path together with its total travel distance
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub nodes: Path,
    pub distance: f64,
}


/// Dijkstra shortest path, empty for unknown or unreachable endpoints
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Path {
    graph.route(start, end, Algorithm::Dijkstra)
        .map(|route| route.nodes)
        .unwrap_or_default()
}

/// A* path guided by straight-line distance, empty for unknown or unreachable endpoints
pub fn find_path_a_star(graph: &Graph, start: &str, end: &str) -> Path {
    graph.route(start, end, Algorithm::AStar)
        .map(|route| route.nodes)
        .unwrap_or_default()
}


impl Graph {

    /// Shortest route between two known locations
    pub fn route(&self, start: &str, end: &str, algorithm: Algorithm) -> Result<Route, RouteError> {
        let start = self.endpoint(start)?.id.as_str();
        let goal = self.endpoint(end)?;

        debug!(%algorithm, start, end, "solving");

        let neighbors = |node: &&str| self.weighted_neighbors(node);
        let is_goal = |node: &&str| *node == goal.id;

        let found = match algorithm {
            Algorithm::Dijkstra => dijkstra(start, neighbors, is_goal),
            Algorithm::AStar => {
                let heuristic = |node: &&str| {
                    self.node(node)
                        .map(|n| OrderedFloat(n.distance_to(goal)))
                        .unwrap_or_default()
                };
                AStar::default().plan(start, neighbors, heuristic, is_goal)
            }
        };

        let nodes: Path = match found {
            Ok(nodes) => nodes.into_iter().map(str::to_string).collect(),
            Err(PathPlannerError::NoPathFound) => {
                debug!(%algorithm, start, end, "no route");
                return Err(RouteError::Unreachable {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let distance = self.path_distance(&nodes).ok_or_else(|| RouteError::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        })?;

        debug!(%algorithm, stops = nodes.len(), distance, "route found");
        Ok(Route { nodes, distance })
    }

    /// Best distance from `start` to every location it can reach, in discovery order
    pub fn distances_from(&self, start: &str) -> Result<Vec<(String, f64)>, RouteError> {
        let start = self.endpoint(start)?.id.as_str();
        let trace = dijkstra_nodes_full(start, |node: &&str| self.weighted_neighbors(node));

        Ok(trace
            .into_iter()
            .map(|(id, (_, cost))| (id.to_string(), cost.into_inner()))
            .collect())
    }

    /// Sum of the cheapest direct edge between consecutive stops
    /// `None` if two consecutive stops are not directly connected, `Some(0.0)` for single stops
    pub fn path_distance(&self, path: &[String]) -> Option<f64> {
        path.windows(2)
            .try_fold(0.0, |total, leg| Some(total + self.edge_weight(&leg[0], &leg[1])?))
    }

    fn endpoint(&self, id: &str) -> Result<&Node, RouteError> {
        self.node(id).ok_or_else(|| RouteError::UnknownEndpoint(id.to_string()))
    }

    pub(crate) fn weighted_neighbors<'g>(&'g self, id: &str) -> impl Iterator<Item = (&'g str, Cost)> + use<'g> {
        self.neighbors(id)
            .iter()
            .map(|n| (n.id.as_str(), OrderedFloat(n.distance)))
    }
}
