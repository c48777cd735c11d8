use std::fmt;

use common::error::GraphError;
use common::types::WeightedPath;
use graph_walk_core::{
    AdjacencyGraph, creates_cycle, find_all_paths, shortest_path_with_weight,
    strongly_connected_components,
};
use tracing::{info, warn};

use super::config::QueryConfig;

/// Result of one successfully executed query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    CreatesCycle {
        source: String,
        target: String,
        creates_cycle: bool,
    },
    ShortestPath {
        source: String,
        target: String,
        path: WeightedPath<String>,
    },
    AllPaths {
        source: String,
        target: String,
        paths: Vec<Vec<String>>,
    },
    Components(Vec<Vec<String>>),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryOutcome::CreatesCycle {
                source,
                target,
                creates_cycle,
            } => write!(
                f,
                "creates_cycle {} -> {}: {}",
                source, target, creates_cycle
            ),
            QueryOutcome::ShortestPath {
                source,
                target,
                path,
            } => write!(
                f,
                "shortest_path {} -> {}: {} (weight {})",
                source,
                target,
                path.path.join(" -> "),
                path.weight
            ),
            QueryOutcome::AllPaths {
                source,
                target,
                paths,
            } => {
                write!(f, "all_paths {} -> {}: {} found", source, target, paths.len())?;
                for path in paths {
                    write!(f, "\n  {}", path.join(" -> "))?;
                }
                Ok(())
            }
            QueryOutcome::Components(components) => {
                write!(f, "scc: {} components", components.len())?;
                for component in components {
                    write!(f, "\n  {{{}}}", component.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Runs configured queries against a loaded graph.
pub struct QueryRunner<'g> {
    graph: &'g AdjacencyGraph<String, ()>,
}

impl<'g> QueryRunner<'g> {
    pub fn new(graph: &'g AdjacencyGraph<String, ()>) -> Self {
        QueryRunner { graph }
    }

    /// Executes a single query.
    pub fn run(&self, query: &QueryConfig) -> Result<QueryOutcome, GraphError<String>> {
        let outcome = match query {
            QueryConfig::CreatesCycle { source, target } => QueryOutcome::CreatesCycle {
                source: source.clone(),
                target: target.clone(),
                creates_cycle: creates_cycle(self.graph, source, target)?,
            },
            QueryConfig::ShortestPath { source, target } => QueryOutcome::ShortestPath {
                source: source.clone(),
                target: target.clone(),
                path: shortest_path_with_weight(self.graph, source, target)?,
            },
            QueryConfig::AllPaths { source, target } => QueryOutcome::AllPaths {
                source: source.clone(),
                target: target.clone(),
                paths: find_all_paths(self.graph, source, target)?,
            },
            QueryConfig::Scc => QueryOutcome::Components(strongly_connected_components(self.graph)?),
        };
        Ok(outcome)
    }

    /// Executes every query in order. A failing query is logged and does not
    /// stop the ones after it.
    pub fn run_all(&self, queries: &[QueryConfig]) -> Vec<Result<QueryOutcome, GraphError<String>>> {
        queries
            .iter()
            .map(|query| {
                let result = self.run(query);
                match &result {
                    Ok(_) => info!(?query, "query complete"),
                    Err(e) => warn!(?query, error = %e, "query failed. Continuing."),
                }
                result
            })
            .collect()
    }
}
