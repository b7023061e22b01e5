use tracing::{debug, warn};

use crate::errors::RouteError;
use crate::graph_algos::dijkstra::dijkstra_nodes_full;
use crate::graph_algos::shortest_path;
use crate::network::Graph;
use crate::routing::{Algorithm, Route};


/// One hop of a delivery tour
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryLeg {
    pub from: String,
    pub to: String,
    pub route: Route,
}

/// Greedy delivery tour starting at a depot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeliveryPlan {
    pub legs: Vec<DeliveryLeg>,
    pub total_distance: f64,
    /// Stops that are unknown or could not be reached, in the order they were dropped
    pub skipped: Vec<String>,
}

impl DeliveryPlan {

    /// Stops in visiting order
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.legs.iter().map(|leg| leg.to.as_str())
    }
}


impl Graph {

    /// Candidate with the shortest route to `target`, e.g. the warehouse that should serve a customer
    /// Ties go to the candidate listed first; unknown or unreachable candidates are ignored
    pub fn nearest<S: AsRef<str>>(&self, candidates: &[S], target: &str) -> Result<(String, Route), RouteError> {
        if !self.contains(target) {
            return Err(RouteError::UnknownEndpoint(target.to_string()));
        }

        let mut best: Option<(String, Route)> = None;

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let route = match self.route(candidate, target, Algorithm::Dijkstra) {
                Ok(route) => route,
                Err(e) => {
                    debug!(candidate, error = %e, "candidate skipped");
                    continue;
                }
            };

            if best.as_ref().is_none_or(|(_, b)| route.distance < b.distance) {
                best = Some((candidate.to_string(), route));
            }
        }

        best.ok_or_else(|| RouteError::NoReachableCandidate(target.to_string()))
    }

    /// Visit every stop once, always driving to the closest remaining one
    /// Unknown stops and stops that can not be reached from the tour are listed in `skipped`
    pub fn plan_deliveries<S: AsRef<str>>(&self, depot: &str, stops: &[S]) -> Result<DeliveryPlan, RouteError> {
        if !self.contains(depot) {
            return Err(RouteError::UnknownEndpoint(depot.to_string()));
        }

        let mut plan = DeliveryPlan::default();
        let mut remaining: Vec<&str> = Vec::new();

        for stop in stops {
            let stop = stop.as_ref();
            if self.contains(stop) {
                remaining.push(stop);
            } else {
                warn!(stop, "unknown delivery stop skipped");
                plan.skipped.push(stop.to_string());
            }
        }

        let mut current = depot;

        while !remaining.is_empty() {
            let trace = dijkstra_nodes_full(current, |node: &&str| self.weighted_neighbors(node));

            // closest remaining stop, first listed wins a tie
            let mut closest: Option<(usize, usize, f64)> = None;
            for (position, stop) in remaining.iter().enumerate() {
                let Some((index, _, &(_, cost))) = trace.get_full(*stop) else {
                    continue;
                };
                if closest.is_none_or(|(_, _, best)| cost.into_inner() < best) {
                    closest = Some((position, index, cost.into_inner()));
                }
            }

            let Some((position, index, distance)) = closest else {
                warn!(from = current, unreachable = ?remaining, "delivery stops unreachable");
                plan.skipped.extend(remaining.drain(..).map(str::to_string));
                break;
            };

            let nodes = shortest_path(&trace, index)?
                .into_iter()
                .map(str::to_string)
                .collect();
            let next = remaining.remove(position);

            plan.legs.push(DeliveryLeg {
                from: current.to_string(),
                to: next.to_string(),
                route: Route { nodes, distance },
            });
            plan.total_distance += distance;
            current = next;
        }

        debug!(depot, legs = plan.legs.len(), skipped = plan.skipped.len(), total = plan.total_distance, "delivery plan");
        Ok(plan)
    }
}
