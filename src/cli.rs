use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use freightpath::report::DEFAULT_SPEED_KMH;
use freightpath::Algorithm;


/// Shortest routes between locations of a logistics network
#[derive(Parser, Debug)]
#[command(name = "freightpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start location id
    pub start: String,

    /// Destination location id
    pub end: String,

    /// JSON map file, the built-in network is used when it can not be loaded
    #[arg(long, env = "FREIGHTPATH_MAP", default_value = "map_data.json")]
    pub map: PathBuf,

    /// Search algorithm(s) to run
    #[arg(long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmChoice,

    /// Average travel speed for time estimates, km/h
    #[arg(long, default_value_t = DEFAULT_SPEED_KMH, value_parser = parse_speed)]
    pub speed: f64,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "freightpath=debug")
    #[arg(long)]
    pub log_level: Option<String>,
}


fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a positive number of km/h, got {value}"))
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Dijkstra,
    Astar,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Astar => &[Algorithm::AStar],
            AlgorithmChoice::Both => &Algorithm::ALL,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["freightpath", "factory", "warehouse_prem"]).unwrap();
        assert_eq!(cli.start, "factory");
        assert_eq!(cli.end, "warehouse_prem");
        assert_eq!(cli.algorithm, AlgorithmChoice::Both);
        assert_eq!(cli.speed, 60.0);
        assert_eq!(cli.algorithm.algorithms(), &[Algorithm::Dijkstra, Algorithm::AStar]);
    }

    #[test]
    fn test_single_algorithm() {
        let cli = Cli::try_parse_from(["freightpath", "a", "b", "--algorithm", "astar", "--speed", "45"]).unwrap();
        assert_eq!(cli.algorithm.algorithms(), &[Algorithm::AStar]);
        assert_eq!(cli.speed, 45.0);
    }

    #[test]
    fn test_speed_must_be_positive_and_finite() {
        for bad in ["0", "-5", "NaN", "inf", "fast"] {
            let arg = format!("--speed={bad}");
            assert!(Cli::try_parse_from(["freightpath", "a", "b", arg.as_str()]).is_err(), "{bad}");
        }
        assert_eq!(parse_speed("7.5"), Ok(7.5));
        assert!(parse_speed("0.0").is_err());
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["freightpath", "factory"]).is_err());
        assert!(Cli::try_parse_from(["freightpath", "a", "b", "c"]).is_err());
    }
}
