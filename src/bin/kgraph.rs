//! CLI entry point for the `kgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use keygraph::cli::commands;
use keygraph::types::GraphError;

#[derive(Parser)]
#[command(
    name = "kgraph",
    about = "Keygraph CLI — BFS shortest paths over keyed directed graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in six-node demonstration graph
    Demo {
        /// BFS source key
        #[arg(long, default_value = "0")]
        from: u64,
        /// Path destination key
        #[arg(long, default_value = "5")]
        to: u64,
    },
    /// Build a graph from node/edge specs and report the shortest route
    Route {
        /// Node spec KEY:OWNER (owner: local or remote), repeatable
        #[arg(long = "node", required = true)]
        nodes: Vec<String>,
        /// Edge spec SRC,DST, repeatable
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// BFS source key
        #[arg(long)]
        from: u64,
        /// Path destination key
        #[arg(long)]
        to: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = match cli.command {
        Commands::Demo { from, to } => commands::cmd_demo(from, to, json),
        Commands::Route {
            nodes,
            edges,
            from,
            to,
        } => commands::cmd_route(&nodes, &edges, from, to, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::NodeNotFound(_) => 4,
            GraphError::InvalidNodeSpec(_)
            | GraphError::InvalidEdgeSpec(_)
            | GraphError::UnknownOwner(_) => 3,
        };
        process::exit(code);
    }
}
