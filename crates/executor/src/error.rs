use thiserror::Error;

use common::error::GraphError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Failed to read edge list: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed edge list: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError<String>),
}
