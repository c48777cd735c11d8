use std::fmt;

/// The category of a failed graph query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A requested endpoint is not a vertex of the graph.
    #[error("vertex not found")]
    VertexNotFound,

    /// No path leads from the source to the target vertex.
    #[error("target vertex not reachable from source")]
    TargetNotReachable,

    /// The operation is not defined for the graph's kind (e.g. SCCs of an undirected graph).
    #[error("operation not supported for this kind of graph")]
    InvalidGraphKind,

    /// The priority queue ran dry while it was expected to hold items.
    #[error("priority queue unexpectedly empty")]
    QueueError,

    /// A weighted graph carries an edge weight below zero, or one that is
    /// infinite or NaN.
    #[error("negative or non-finite edge weight")]
    NegativeWeight,
}

/// The library entry point that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreatesCycle,
    ShortestPath,
    StronglyConnectedComponents,
    FindAllPaths,
    BuildGraph,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::CreatesCycle => "creates_cycle",
            Operation::ShortestPath => "shortest_path",
            Operation::StronglyConnectedComponents => "strongly_connected_components",
            Operation::FindAllPaths => "find_all_paths",
            Operation::BuildGraph => "build_graph",
        };
        f.write_str(name)
    }
}

/// Structured error returned by every graph query.
///
/// Carries the error kind, the operation that failed and, where one is
/// involved, the vertex that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphError<K> {
    pub kind: ErrorKind,
    pub operation: Operation,
    pub vertex: Option<K>,
}

impl<K> GraphError<K> {
    pub fn new(kind: ErrorKind, operation: Operation) -> Self {
        GraphError {
            kind,
            operation,
            vertex: None,
        }
    }

    pub fn with_vertex(kind: ErrorKind, operation: Operation, vertex: K) -> Self {
        GraphError {
            kind,
            operation,
            vertex: Some(vertex),
        }
    }

    pub fn vertex_not_found(operation: Operation, vertex: K) -> Self {
        Self::with_vertex(ErrorKind::VertexNotFound, operation, vertex)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl<K: fmt::Debug> fmt::Display for GraphError<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.vertex {
            Some(vertex) => write!(f, "{}: {} (vertex {:?})", self.operation, self.kind, vertex),
            None => write!(f, "{}: {}", self.operation, self.kind),
        }
    }
}

impl<K: fmt::Debug> std::error::Error for GraphError<K> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
