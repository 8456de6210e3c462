use anyhow::Context;
use clap::Parser;
use delivery_routes::{
    all_paths, cost_of_route_str, find_shortest_path, utility::reference_graph, AllPathsOptions,
    RouteCost, ShortestPath,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Answers the standard delivery queries on the reference network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print all answers as one JSON document
    #[arg(long)]
    json: bool,

    /// Source of the additional route enumeration
    #[arg(long, default_value = "E")]
    from: String,

    /// Destination of the additional route enumeration
    #[arg(long, default_value = "D")]
    to: String,

    /// Options of the additional route enumeration as JSON, e.g. '{"maxStop": 4}'
    #[arg(long, default_value = "{}")]
    options: String,
}

#[derive(Serialize)]
struct Report {
    graph: String,
    route_costs: Vec<(String, RouteCost)>,
    route_counts: Vec<(String, usize)>,
    cheapest: Vec<(String, ShortestPath)>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = AllPathsOptions::from_json(&args.options).context("parsing --options")?;

    let graph = reference_graph()?;

    let mut route_costs = Vec::new();
    for route in ["A-B-E", "A-D", "E-A-C-F", "A-D-F"] {
        route_costs.push((route.to_string(), cost_of_route_str(&graph, route)?));
    }

    let queries = [
        (
            "E to D with a maximum of 4 stops without using the same route twice",
            "E",
            "D",
            AllPathsOptions::default().max_stop(4),
        ),
        (
            "E to E without using the same route twice",
            "E",
            "E",
            AllPathsOptions::default(),
        ),
        (
            "E to E with a cost below 20 using the same route twice",
            "E",
            "E",
            AllPathsOptions::default().max_cost(20).allow_same_route(true),
        ),
    ];
    let mut route_counts = Vec::new();
    for (description, source, destination, options) in queries {
        let walks = all_paths(&graph, source, destination, &options)?;
        route_counts.push((description.to_string(), walks.len()));
    }
    let walks = all_paths(&graph, &args.from, &args.to, &options)
        .with_context(|| format!("enumerating routes from {} to {}", args.from, args.to))?;
    route_counts.push((
        format!("{} to {} with {:?}", args.from, args.to, options),
        walks.len(),
    ));

    let mut cheapest = Vec::new();
    for (source, destination) in [("E", "D"), ("E", "E")] {
        cheapest.push((
            format!("{} to {}", source, destination),
            find_shortest_path(&graph, source, destination)?,
        ));
    }

    let report = Report {
        graph: graph.render(),
        route_costs,
        route_counts,
        cheapest,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", report.graph);
    for (route, cost) in &report.route_costs {
        println!("Delivery cost for route {} is {}", route, cost);
    }
    for (description, count) in &report.route_counts {
        println!("Number of possible routes from {} is {}", description, count);
    }
    for (description, shortest_path) in &report.cheapest {
        match shortest_path {
            ShortestPath::Found(walk) => {
                println!("Cheapest delivery route from {} is {}", description, walk)
            }
            ShortestPath::Unreachable => {
                println!("There is no delivery route from {}", description)
            }
        }
    }

    Ok(())
}
