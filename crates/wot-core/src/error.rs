// crates/wot-core/src/error.rs

use thiserror::Error;

/// Error types shared by every crate in the Web-of-Trust workspace.
#[derive(Debug, Error)]
pub enum WotError {
    /// The graph definition could not be read or parsed.
    ///
    /// `line` is 1-based; 0 means the failure is not tied to a line
    /// (missing file, I/O error).
    #[error("Graph load error at line {line}: {message}")]
    GraphLoad { line: usize, message: String },

    /// A query or edge references a name that is not part of the graph.
    #[error("Unknown node '{name}' in {operation}")]
    UnknownNode { name: String, operation: String },

    /// A recorded parent edge has no matching link probability.
    #[error("Missing link probability from '{parent}' to '{child}'")]
    MissingLink { parent: String, child: String },

    /// An edge was rejected during graph construction.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// A trust computation exceeded its configured guard.
    #[error("Trust computation from '{from}' to '{to}' aborted: {reason}")]
    ComputationAborted {
        from: String,
        to: String,
        reason: String,
    },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WotError {
    /// Shorthand for [`WotError::UnknownNode`].
    pub fn unknown_node(name: &str, operation: &str) -> Self {
        WotError::UnknownNode {
            name: name.to_string(),
            operation: operation.to_string(),
        }
    }
}

impl From<std::io::Error> for WotError {
    fn from(e: std::io::Error) -> Self {
        WotError::GraphLoad {
            line: 0,
            message: e.to_string(),
        }
    }
}
