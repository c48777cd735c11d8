pub mod config;
pub mod error;
pub mod loader;
pub mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use common::types::Traits;
use error::Error;
use loader::EdgeListLoader;
use runner::QueryRunner;

/// Runs graph queries from a configuration file against a CSV edge list.
#[derive(Parser)]
#[command(name = "executor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to crates/executor/Config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match run(cli.config) {
        Ok(failed) if failed == 0 => ExitCode::SUCCESS,
        Ok(failed) => {
            error!(failed, "some queries failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "executor aborted");
            ExitCode::FAILURE
        }
    }
}

/// Loads config and graph, runs every query and prints the outcomes.
///
/// Returns the number of failed queries.
fn run(config_path: Option<PathBuf>) -> Result<usize, Error> {
    let config_path = match config_path {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    info!(path = %config_path.display(), queries = config.queries.len(), "config loaded");

    let traits = Traits {
        is_directed: config.graph.directed,
        is_weighted: config.graph.weighted,
    };
    let graph = EdgeListLoader::new(config.graph.edges_path.clone()).load_graph(traits)?;

    let runner = QueryRunner::new(&graph);
    let mut failed = 0;

    for result in runner.run_all(&config.queries) {
        match result {
            Ok(outcome) => println!("{}", outcome),
            Err(e) => {
                println!("error: {}", e);
                failed += 1;
            }
        }
    }

    Ok(failed)
}
