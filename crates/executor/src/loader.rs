use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info};

use super::error::Error;
use common::types::Traits;
use graph_walk_core::AdjacencyGraph;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_vertex: String,

    /// Empty for a row that only declares an isolated vertex.
    #[serde(rename = "to", default)]
    pub to_vertex: Option<String>,

    /// Empty or absent on unweighted edge lists.
    #[serde(rename = "weight", default)]
    pub weight: Option<f64>,
}

/// Vertices and edges read from an edge-list file.
#[derive(Debug, Default, PartialEq)]
pub struct EdgeList {
    pub isolated: Vec<String>,
    pub edges: Vec<(String, String, f64)>,
}

/// Reads a graph from a CSV edge list with a `from,to,weight` header.
///
/// Additional columns are ignored.
pub struct EdgeListLoader {
    path: PathBuf,
}

impl EdgeListLoader {
    pub fn new(path: PathBuf) -> Self {
        EdgeListLoader { path }
    }

    fn parse_csv_to_edges(&self) -> Result<EdgeList, Error> {
        let file = File::open(&self.path)?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut list = EdgeList::default();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            match record.to_vertex {
                Some(to) => list
                    .edges
                    .push((record.from_vertex, to, record.weight.unwrap_or(0.0))),
                None => list.isolated.push(record.from_vertex),
            }
        }
        Ok(list)
    }

    /// Loads the edge list and builds an immutable graph with the given traits.
    pub fn load_graph(&self, traits: Traits) -> Result<AdjacencyGraph<String, ()>, Error> {
        let list = self.parse_csv_to_edges()?;
        debug!(
            path = %self.path.display(),
            edges = list.edges.len(),
            isolated = list.isolated.len(),
            "parsed edge list"
        );

        let graph = AdjacencyGraph::from_edge_list(traits, list.isolated, list.edges)?;
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = traits.is_directed,
            weighted = traits.is_weighted,
            "graph loaded"
        );
        Ok(graph)
    }
}
