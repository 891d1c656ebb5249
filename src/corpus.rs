// src/corpus.rs
//! Reading corpus files from disk.

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;

/// Reads `path` and joins its lines with single spaces.
///
/// # Errors
/// Returns `GraphError::Io` if the file cannot be read.
pub fn load(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(content.lines().collect::<Vec<_>>().join(" "))
}

/// Reads `path` and builds its word graph. An empty file gives an empty graph.
///
/// # Errors
/// Returns `GraphError::Io` if the file cannot be read.
pub fn load_graph(path: &Path) -> Result<WordGraph> {
    let text = load(path)?;
    let graph = WordGraph::from_text(&text);
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded corpus"
    );
    Ok(graph)
}
