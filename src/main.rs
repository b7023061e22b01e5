//! freightpath - shortest routes through a factory/warehouse network
//!
//! Loads the map file (or the built-in network), runs the selected search
//! algorithms between two locations and prints one report per algorithm.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use cli::Cli;
use freightpath::network::{builtin, loader};
use freightpath::{logging, Graph, RouteReport};


fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // wrong argument count and other usage errors exit with 1
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let graph = load_network(&cli);

    println!("Calculating route from {} to {}...", cli.start, cli.end);

    for &algorithm in cli.algorithm.algorithms() {
        let title = format!("Algorithm: {algorithm}");
        println!();
        println!("{title}");
        println!("{}", "=".repeat(title.len()));

        let path = match graph.route(&cli.start, &cli.end, algorithm) {
            Ok(route) => route.nodes,
            Err(e) => {
                tracing::info!(error = %e, "no route");
                Vec::new()
            }
        };
        print!("{}", RouteReport::new(&graph, &path).with_speed(cli.speed));
    }

    ExitCode::SUCCESS
}

fn load_network(cli: &Cli) -> Graph {
    let graph = match loader::load_json(&cli.map) {
        Ok(graph) => graph,
        Err(e) if !cli.map.exists() => {
            tracing::info!(error = %e, "map file not found, using built-in network");
            return builtin::default_network();
        }
        Err(e) => {
            tracing::warn!(error = %e, "using built-in network");
            return builtin::default_network();
        }
    };

    for edge in graph.inadmissible_edges() {
        tracing::warn!(
            from = %edge.from,
            to = %edge.to,
            distance = edge.distance,
            straight_line = edge.straight_line,
            "road shorter than straight line, A* may not be optimal"
        );
    }

    graph
}
