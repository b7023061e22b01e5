use std::path::PathBuf;
use thiserror::Error;


/// Errors raised by the generic graph search algorithms
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("no path found")]
    NoPathFound, // Frontier exhausted before the goal was popped
    #[error("goal is unreachable")]
    GoalFailure, // Goal index does not exist in the search trace
}


/// Errors raised while building or querying a logistics network
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("no route from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("no candidate can reach {0}")]
    NoReachableCandidate(String),

    #[error("edge references unknown node: {0}")]
    DanglingEdgeReference(String),

    #[error("invalid distance {distance} on edge {from} -> {to}")]
    InvalidDistance { from: String, to: String, distance: f64 },

    #[error("malformed map data in {path:?}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error(transparent)]
    Search(#[from] PathPlannerError),
}
