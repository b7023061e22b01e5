use std::fmt;

use crate::network::Graph;


/// Average travel speed used for time estimates, km/h
pub const DEFAULT_SPEED_KMH: f64 = 60.0;


/// Printable itinerary for a path through a graph
///
/// ```text
/// Route found:
/// 1. Clock Tower Factory (factory) -> 6 km
/// 2. Clement Town Warehouse (warehouse_clement)
/// Total distance: 6 km
/// Estimated travel time: 0.1 hours (60 km/h)
/// ```
pub struct RouteReport<'a> {
    graph: &'a Graph,
    path: &'a [String],
    speed_kmh: f64,
}

impl<'a> RouteReport<'a> {

    pub fn new(graph: &'a Graph, path: &'a [String]) -> Self {
        Self { graph, path, speed_kmh: DEFAULT_SPEED_KMH }
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Total distance along the path, skipping legs without a direct edge
    pub fn total_distance(&self) -> f64 {
        self.path
            .windows(2)
            .filter_map(|leg| self.graph.edge_weight(&leg[0], &leg[1]))
            .fold(0.0, |total, leg| total + leg)
    }

    /// Travel time in hours at the configured speed
    pub fn travel_hours(&self) -> f64 {
        self.total_distance() / self.speed_kmh
    }
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return writeln!(f, "No path found!");
        }

        writeln!(f, "Route found:")?;
        for (i, id) in self.path.iter().enumerate() {
            let name = self.graph.node(id).map_or(id.as_str(), |n| n.name.as_str());
            write!(f, "{}. {} ({})", i + 1, name, id)?;

            if let Some(next) = self.path.get(i + 1) {
                if let Some(distance) = self.graph.edge_weight(id, next) {
                    write!(f, " -> {} km", significant(distance))?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "Total distance: {} km", significant(self.total_distance()))?;
        writeln!(
            f,
            "Estimated travel time: {} hours ({} km/h)",
            significant(self.travel_hours()),
            significant(self.speed_kmh)
        )
    }
}

/// Six significant digits without trailing zeros, e.g. `0.156667` or `12.6`
fn significant(value: f64) -> String {
    const DIGITS: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if !(-4..DIGITS).contains(&exponent) {
        let text = format!("{:.*e}", (DIGITS - 1) as usize, value);
        return match text.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_fraction(mantissa)),
            None => text,
        };
    }

    let decimals = (DIGITS - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
