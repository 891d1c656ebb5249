// src/graph/path.rs
//! Minimum-weight paths between words (Dijkstra over occurrence counts).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use super::word_graph::WordGraph;
use crate::error::{GraphError, Result};
use crate::tokens::normalize_word;

/// A path through the graph, start and end inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPath {
    pub nodes: Vec<String>,
    /// Sum of the edge weights along the path.
    pub weight: usize,
}

impl WordPath {
    /// Number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(src, dest)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes.windows(2).filter_map(|pair| match pair {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        })
    }

    #[must_use]
    pub fn contains_edge(&self, src: &str, dest: &str) -> bool {
        self.edges().any(|(a, b)| a == src && b == dest)
    }

    /// Renders the path as `a -> b -> c`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.nodes.join(" -> ")
    }
}

/// Settled distances and predecessors from a single source.
struct SearchState<'g> {
    dist: HashMap<&'g str, usize>,
    prev: HashMap<&'g str, &'g str>,
}

/// Finds a minimum-weight path from `start` to `end`.
///
/// Ties between equally short frontier nodes are broken by word order, so
/// results are reproducible.
///
/// # Errors
/// `UnknownWords` if either endpoint is missing, `NoPath` if `end` is not
/// reachable from `start`.
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> Result<WordPath> {
    let start = normalize_word(start);
    let end = normalize_word(end);

    let (Some(src), Some(dest)) = (node_ref(graph, &start), node_ref(graph, &end)) else {
        return Err(GraphError::unknown_pair(&start, &end));
    };

    let state = dijkstra(graph, src, Some(dest));
    let path = rebuild(&state, src, dest).ok_or(GraphError::NoPath { start, end })?;

    tracing::debug!(hops = path.hops(), weight = path.weight, "shortest path found");
    Ok(path)
}

/// Shortest paths from `start` to every other reachable word, sorted by
/// destination.
///
/// # Errors
/// `UnknownWord` if `start` is not in the graph.
pub fn shortest_paths_from(graph: &WordGraph, start: &str) -> Result<Vec<WordPath>> {
    let start = normalize_word(start);
    let Some(src) = node_ref(graph, &start) else {
        return Err(GraphError::UnknownWord { word: start });
    };

    let state = dijkstra(graph, src, None);
    let mut targets: Vec<&str> = state.dist.keys().copied().filter(|n| *n != src).collect();
    targets.sort_unstable();

    let paths: Vec<WordPath> = targets
        .into_iter()
        .filter_map(|dest| rebuild(&state, src, dest))
        .collect();

    tracing::debug!(%start, reachable = paths.len(), "single-source shortest paths");
    Ok(paths)
}

/// Borrows the graph's own copy of `word` so search maps can key on `&str`
/// tied to the graph's lifetime.
fn node_ref<'g>(graph: &'g WordGraph, word: &str) -> Option<&'g str> {
    graph.nodes.get(word).map(String::as_str)
}

/// Runs Dijkstra from `src`. Stops as soon as `target` is settled when one is
/// given, otherwise settles every reachable node.
fn dijkstra<'g>(graph: &'g WordGraph, src: &'g str, target: Option<&str>) -> SearchState<'g> {
    let mut dist: HashMap<&'g str, usize> = HashMap::new();
    let mut prev: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue: BinaryHeap<Reverse<(usize, &'g str)>> = BinaryHeap::new();

    dist.insert(src, 0);
    queue.push(Reverse((0, src)));

    while let Some(Reverse((d, node))) = queue.pop() {
        if dist.get(node).is_some_and(|&best| d > best) {
            continue;
        }
        if target == Some(node) {
            break;
        }
        relax(graph, node, d, &mut dist, &mut prev, &mut queue);
    }

    SearchState { dist, prev }
}

fn relax<'g>(
    graph: &'g WordGraph,
    node: &'g str,
    d: usize,
    dist: &mut HashMap<&'g str, usize>,
    prev: &mut HashMap<&'g str, &'g str>,
    queue: &mut BinaryHeap<Reverse<(usize, &'g str)>>,
) {
    for (next, &w) in graph.neighbors(node) {
        let candidate = d.saturating_add(w);
        let improves = dist.get(next.as_str()).map_or(true, |&cur| candidate < cur);
        if improves {
            dist.insert(next.as_str(), candidate);
            prev.insert(next.as_str(), node);
            queue.push(Reverse((candidate, next.as_str())));
        }
    }
}

fn rebuild(state: &SearchState<'_>, src: &str, dest: &str) -> Option<WordPath> {
    let weight = *state.dist.get(dest)?;

    let mut nodes = vec![dest.to_string()];
    let mut cursor = dest;
    while cursor != src {
        cursor = *state.prev.get(cursor)?;
        nodes.push(cursor.to_string());
    }
    nodes.reverse();

    Some(WordPath { nodes, weight })
}
