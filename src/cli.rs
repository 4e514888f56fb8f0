//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// arcgraph - directed graph engine
#[derive(Parser, Debug)]
#[command(name = "arcgraph")]
#[command(version)]
#[command(about = "Generate directed graphs, analyze them and export them as Graphviz DOT")]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a graph and export it
    Generate(GraphArgs),

    /// Build a graph, run every algorithm on it and report the results
    Analyze(GraphArgs),
}

/// Graph selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Which generator builds the graph
    #[arg(short, long, value_enum, default_value_t = GraphKind::Dag)]
    pub kind: GraphKind,

    /// Node count for the random generators, the number to factor for divisors
    #[arg(short, long)]
    pub nodes: usize,

    /// Seed for reproducible runs (overrides the configuration file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// DOT output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Record traversal and ordering marks as colors and shapes
    #[arg(long, default_value_t = false)]
    pub visualize: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Random directed graph, may contain cycles
    Random,
    /// Random directed acyclic graph
    Dag,
    /// Divisibility graph of the node count
    Divisors,
}
