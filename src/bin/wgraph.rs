//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::commands::{self, SearchKind};
use weighted_graph::config::{load_config, GraphConfig};
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph: load weighted edge lists and query reachability"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load edges as undirected
    #[arg(long)]
    undirected: bool,

    /// Weight for lines without a weight field
    #[arg(long)]
    default_weight: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print the adjacency structure
    Print {
        /// Path to the edge-list file
        file: PathBuf,
        /// Print a directed graph's incoming adjacency
        #[arg(long)]
        inverse: bool,
    },
    /// List a node's neighbors
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node name
        node: String,
    },
    /// Show a node's weighted degree
    Degree {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node name
        node: String,
    },
    /// Depth-first search from a node
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting node
        start: String,
    },
    /// Breadth-first search from a node
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting node
        start: String,
    },
    /// Write the normalized edge list
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(3);
            }
        },
        None => GraphConfig::default(),
    }
    .with_overrides(cli.undirected, cli.default_weight);

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level.parse().unwrap_or(log::LevelFilter::Info)
    };
    env_logger::Builder::new()
        .filter_module("weighted_graph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, &config, json),
        Commands::Print { file, inverse } => commands::cmd_print(&file, &config, inverse),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, &config, &node, json),
        Commands::Degree { file, node } => commands::cmd_degree(&file, &config, &node, json),
        Commands::Dfs { file, start } => {
            commands::cmd_search(&file, &config, SearchKind::Dfs, &start, json)
        }
        Commands::Bfs { file, start } => {
            commands::cmd_search(&file, &config, SearchKind::Bfs, &start, json)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, &config, json, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidWeight { .. } => 2,
            GraphError::Config(_) => 3,
            GraphError::EmptyContainer(_) => 5,
        };
        process::exit(code);
    }
}
