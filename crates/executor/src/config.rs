use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    /// CSV edge list; relative paths resolve against the config file's directory.
    pub edges_path: PathBuf,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub weighted: bool,
}

fn default_directed() -> bool {
    true
}

/// A single query to run against the loaded graph.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryConfig {
    CreatesCycle { source: String, target: String },
    ShortestPath { source: String, target: String },
    AllPaths { source: String, target: String },
    Scc,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub graph: GraphConfig,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

/// Default config location, relative to the current directory.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

/// Environment override source: `EXECUTOR_` prefix and `__` between nesting
/// levels, e.g. `EXECUTOR_GRAPH__WEIGHTED=true`. A single `_` cannot separate
/// levels since keys such as `edges_path` contain one.
fn environment() -> Environment {
    Environment::with_prefix("EXECUTOR")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Loads configuration from a file and environment variables.
pub fn load_config(config_file_path: &Path) -> Result<Config, Error> {
    load_config_with_env(config_file_path, environment())
}

fn load_config_with_env(config_file_path: &Path, env: Environment) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(env)
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let mut app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    if app_config.graph.edges_path.is_relative() {
        if let Some(dir) = config_file_path.parent() {
            app_config.graph.edges_path = dir.join(&app_config.graph.edges_path);
        }
    }

    Ok(app_config)
}
