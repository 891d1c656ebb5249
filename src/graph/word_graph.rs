// src/graph/word_graph.rs
//! The word-adjacency graph structure and read-only query interface.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;

static NO_NEIGHBORS: LazyLock<HashMap<String, usize>> = LazyLock::new(HashMap::new);

/// Directed graph of words. Edge weight counts how often `src` was
/// immediately followed by `dest` in the corpus.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    pub(crate) nodes: HashSet<String>,
    /// Adjacency map: source word -> (destination word -> weight).
    pub(crate) edges: HashMap<String, HashMap<String, usize>>,
}

/// Serializable dump of a graph, sorted for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: usize,
}

impl WordGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from raw corpus text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        super::builder::build_from_text(text)
    }

    /// Adds `word` to the node set if absent.
    pub fn add_node(&mut self, word: &str) {
        if !self.nodes.contains(word) {
            self.nodes.insert(word.to_string());
        }
    }

    /// Records one more occurrence of `src` followed by `dest`.
    ///
    /// Both words must already be nodes.
    pub fn add_edge(&mut self, src: &str, dest: &str) {
        debug_assert!(self.nodes.contains(src), "edge source {src:?} is not a node");
        debug_assert!(self.nodes.contains(dest), "edge destination {dest:?} is not a node");

        *self
            .edges
            .entry(src.to_string())
            .or_default()
            .entry(dest.to_string())
            .or_default() += 1;
    }

    /// Outgoing edges of `node` as destination -> weight. Empty for dead ends
    /// and unknown words.
    #[must_use]
    pub fn neighbors(&self, node: &str) -> &HashMap<String, usize> {
        self.edges.get(node).unwrap_or(&*NO_NEIGHBORS)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.nodes.contains(word)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed word pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    /// Sum of all edge weights, i.e. the number of adjacent pairs in the corpus.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.edges.values().flat_map(HashMap::values).sum()
    }

    #[must_use]
    pub fn weight(&self, src: &str, dest: &str) -> Option<usize> {
        self.edges.get(src).and_then(|targets| targets.get(dest)).copied()
    }

    /// All nodes in ascending order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.nodes.iter().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// All edges as `(src, dest, weight)`, sorted by source then destination.
    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str, usize)> {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .flat_map(|(src, targets)| {
                targets
                    .iter()
                    .map(move |(dest, &w)| (src.as_str(), dest.as_str(), w))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Outgoing edges of `node` sorted by destination.
    #[must_use]
    pub fn successors(&self, node: &str) -> Vec<(&str, usize)> {
        let mut out: Vec<_> = self
            .neighbors(node)
            .iter()
            .map(|(dest, &w)| (dest.as_str(), w))
            .collect();
        out.sort_unstable();
        out
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().into_iter().map(str::to_string).collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(from, to, weight)| EdgeRecord {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn graph(pairs: &[(&str, &str)]) -> WordGraph {
        let mut g = WordGraph::new();
        for (a, b) in pairs {
            g.add_node(a);
            g.add_node(b);
            g.add_edge(a, b);
        }
        g
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = WordGraph::new();
        g.add_node("a");
        g.add_node("a");
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_repeated_edge_increments_weight() {
        let g = graph(&[("a", "b"), ("a", "b"), ("a", "c")]);
        assert_eq!(g.weight("a", "b"), Some(2));
        assert_eq!(g.weight("a", "c"), Some(1));
        assert_eq!(g.weight("b", "a"), None);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.total_weight(), 3);
    }

    #[test]
    fn test_neighbors_of_dead_end_is_empty() {
        let g = graph(&[("a", "b")]);
        assert!(g.neighbors("b").is_empty());
        assert!(g.neighbors("missing").is_empty());
        assert_eq!(g.neighbors("a").get("b"), Some(&1));
    }

    #[test]
    fn test_sorted_views() {
        let g = graph(&[("c", "a"), ("a", "c"), ("a", "b"), ("b", "c")]);
        assert_eq!(g.nodes(), vec!["a", "b", "c"]);
        assert_eq!(g.successors("a"), vec![("b", 1), ("c", 1)]);
        assert_eq!(
            g.edges(),
            vec![("a", "b", 1), ("a", "c", 1), ("b", "c", 1), ("c", "a", 1)]
        );
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let g = graph(&[("b", "a"), ("a", "b"), ("a", "b")]);
        let snap = g.snapshot();
        assert_eq!(snap.nodes, vec!["a", "b"]);
        assert_eq!(snap.edges[0].from, "a");
        assert_eq!(snap.edges[0].weight, 2);
        assert_eq!(snap.edges[1].from, "b");
    }
}
