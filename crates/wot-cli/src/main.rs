// crates/wot-cli/src/main.rs
//
// CLI entrypoint for Web-of-Trust trust computations.
//
// Loads configuration and a graph definition file, then computes the view
// of one node, a single trust value, or renders the graph itself.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::trust::TrustCmd;
use commands::view::ViewCmd;
use config::WotConfig;
use output::OutputFormat;

use wot_reputation::{Caronni, WebOfTrust};

/// wot — trust propagation over a Web of Trust.
#[derive(Parser, Debug)]
#[command(
    name = "wot",
    version = "0.1.0",
    about = "Compute Caronni trust values over a Web of Trust"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "wot.toml")]
    config: String,

    /// Graph definition file (overrides `graph_path` from the config).
    #[arg(long, global = true)]
    graph: Option<String>,

    /// Recursion depth guard (overrides `max_depth` from the config).
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Trust of one node in every node of the graph.
    View(ViewCmd),

    /// Trust of one node in another.
    Trust(TrustCmd),

    /// Display the loaded graph.
    Graph,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Fall back to defaults if the config file is missing; reported once
    // tracing is up.
    let loaded = WotConfig::load(&cli.config);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => WotConfig::default(),
    };

    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", cli.config),
        Err(e) => tracing::warn!("{}. Using defaults.", e),
    }

    // CLI flags override the config file values.
    if let Some(graph) = cli.graph.clone() {
        config.graph_path = graph;
    }
    if cli.max_depth.is_some() {
        config.max_depth = cli.max_depth;
    }
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let graph = wot_core::load_graph(&config.graph_path)?;

    match &cli.command {
        Commands::Graph => commands::graph::run(&graph, format)?,
        Commands::View(cmd) => {
            let wot = build_wot(graph, &config);
            commands::view::run(cmd, &wot, format)?
        }
        Commands::Trust(cmd) => {
            let wot = build_wot(graph, &config);
            commands::trust::run(cmd, &wot, format)?
        }
    }

    Ok(())
}

fn build_wot(graph: wot_core::TrustGraph, config: &WotConfig) -> WebOfTrust {
    let algorithm = Caronni::with_config(config.caronni_config());
    WebOfTrust::with_algorithm(graph, Box::new(algorithm)).parallel(config.parallel)
}
