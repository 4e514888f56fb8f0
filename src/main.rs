//! # arcgraph
//!
//! Command-line driver: builds a graph with one of the generators, runs the
//! traversals, topological sort and cycle detection on it, and exports the
//! result as Graphviz DOT.
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=debug` to see every
//! graph mutation.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    commands::execute_command(cli)
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
