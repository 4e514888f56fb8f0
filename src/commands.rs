//! CLI command handlers.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use arcgraph_core::ResultExt;
use arcgraph_export::DotExporter;
use arcgraph_graph::{Graph, GraphError, NodeId};
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::cli::{Cli, Commands, GraphArgs, GraphKind};
use crate::config::AppConfig;

/// Execute a CLI command.
///
/// Export failures are reported here and turned into a failing exit code;
/// everything else propagates as an error.
pub fn execute_command(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let exported = match cli.command {
        Commands::Generate(args) => cmd_generate(&config, &args)?,
        Commands::Analyze(args) => cmd_analyze(&config, &args)?,
    };

    Ok(if exported {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Build a graph and export it.
fn cmd_generate(config: &AppConfig, args: &GraphArgs) -> Result<bool> {
    let graph = build_graph(config, args)?;
    info!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "graph generated"
    );
    Ok(export(config, &graph, args.output.as_deref()))
}

/// Build a graph, run every algorithm and print what they found.
fn cmd_analyze(config: &AppConfig, args: &GraphArgs) -> Result<bool> {
    let mut graph = build_graph(config, args)?;
    let mut rng = rng_for(config, args);
    let visualize = args.visualize;

    print!("{graph}");

    let bfs = graph.breadth_first_traversal(visualize);
    println!("Breadth-first: {}", ids(&bfs));

    let dfs = graph.depth_first_traversal(visualize);
    println!("Depth-first: {}", ids(&dfs));

    let sources = graph.sources(visualize);
    println!("Sources: {}", sources.iter().join(" "));

    let order = graph.topological_sort(&mut rng, visualize);
    println!("Topological order: {}", ids(&order));

    let cyclic = graph.has_cycle(visualize);
    println!("Has cycle: {cyclic}");

    info!(cyclic, sorted = order.len(), "analysis complete");

    Ok(match args.output.as_deref() {
        Some(path) => export(config, &graph, Some(path)),
        None => true,
    })
}

fn build_graph(config: &AppConfig, args: &GraphArgs) -> Result<Graph> {
    let mut rng = rng_for(config, args);
    let graph = match args.kind {
        GraphKind::Random => Graph::random_graph(args.nodes, &config.generator, &mut rng)?,
        GraphKind::Dag => Graph::random_dag(args.nodes, &config.generator, &mut rng)?,
        GraphKind::Divisors => {
            let nb = i64::try_from(args.nodes).map_err(|_| {
                GraphError::invalid_config(format!("{} is out of the node id range", args.nodes))
            })?;
            Graph::divisor_graph(nb, args.visualize)
        }
    };
    Ok(graph)
}

/// Seeded from the command line first, then the configuration file, then the OS
fn rng_for(config: &AppConfig, args: &GraphArgs) -> StdRng {
    args.seed
        .or(config.seed)
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Export boundary: failures are logged and reported as `false`
fn export(config: &AppConfig, graph: &Graph, output: Option<&Path>) -> bool {
    let exporter = DotExporter::new(config.export.clone());
    let result = match output {
        Some(path) => exporter.export_to_file(graph, path),
        None => exporter.write_to(graph, &mut io::stdout().lock()),
    };

    let destination = output.map_or_else(
        || "stdout".to_string(),
        |path| path.display().to_string(),
    );
    result
        .inspect_err(|_| error!(destination = %destination, "graph was not exported"))
        .report("export")
        .is_some()
}

fn ids(order: &[NodeId]) -> String {
    order.iter().join(" ")
}
