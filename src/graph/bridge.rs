// src/graph/bridge.rs
//! Bridge words: `w` bridges `a` to `b` when both `a -> w` and `w -> b` exist.

use super::word_graph::WordGraph;
use crate::error::{GraphError, Result};
use crate::tokens::normalize_word;

/// Returns the bridge words from `first` to `second`, sorted ascending.
///
/// # Errors
/// `UnknownWords` if either word is not in the graph, `NoBridgeWords` if
/// both are known but nothing connects them through a single middle word.
pub fn bridge_words(graph: &WordGraph, first: &str, second: &str) -> Result<Vec<String>> {
    let first = normalize_word(first);
    let second = normalize_word(second);

    if !graph.contains(&first) || !graph.contains(&second) {
        return Err(GraphError::unknown_pair(&first, &second));
    }

    let bridges = collect_bridges(graph, &first, &second);
    tracing::debug!(%first, %second, found = bridges.len(), "bridge word query");

    if bridges.is_empty() {
        return Err(GraphError::NoBridgeWords { first, second });
    }
    Ok(bridges)
}

/// Bridge candidates for two words already known to be nodes.
pub(crate) fn collect_bridges(graph: &WordGraph, first: &str, second: &str) -> Vec<String> {
    let mut bridges: Vec<String> = graph
        .neighbors(first)
        .keys()
        .filter(|middle| graph.neighbors(middle).contains_key(second))
        .cloned()
        .collect();
    bridges.sort_unstable();
    bridges
}

/// Formats a bridge word list as `a`, `a and b`, or `a, b and c`.
#[must_use]
pub fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}
