// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("No {word} in the graph!")]
    UnknownWord { word: String },

    #[error("No {first} or {second} in the graph!")]
    UnknownWords { first: String, second: String },

    #[error("No bridge words from {first} to {second}!")]
    NoBridgeWords { first: String, second: String },

    #[error("No path from {start} to {end}!")]
    NoPath { start: String, end: String },

    #[error("The graph is empty, no nodes to start from")]
    EmptyGraph,

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GraphError {
    /// True for the expected outcomes of a query (unknown words, no result),
    /// false for environmental failures such as I/O or bad configuration.
    #[must_use]
    pub fn is_query_outcome(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Config { .. })
    }

    /// True when the query words were fine but nothing connects them.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoBridgeWords { .. } | Self::NoPath { .. })
    }

    pub(crate) fn unknown_pair(first: &str, second: &str) -> Self {
        Self::UnknownWords {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
