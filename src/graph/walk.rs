// src/graph/walk.rs
//! Weighted random walks that stop at dead ends or on a repeated edge.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::word_graph::WordGraph;
use crate::error::{GraphError, Result};

/// Source of uniform integers for the walk.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, upper)`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// `StdRng`-backed source, seeded explicitly or from the OS.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::from_seed)
    }
}

impl RandomSource for SeededSource {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, each reduced modulo `upper`.
/// Once exhausted it keeps returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        self.draws.pop_front().map_or(0, |d| d % upper)
    }
}

/// Why a walk ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WalkStop {
    /// The last node has no outgoing edges.
    DeadEnd,
    /// The chosen edge had already been traversed; it is not part of the walk.
    RepeatedEdge { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub nodes: Vec<String>,
    pub stop: WalkStop,
}

impl Walk {
    /// Traversed `(src, dest)` pairs in order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes.windows(2).filter_map(|pair| match pair {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        })
    }

    /// Renders the walk as `a -> b -> c`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.nodes.join(" -> ")
    }
}

/// Walks the graph from a uniformly chosen start node, picking each next
/// word with probability proportional to edge weight.
///
/// # Errors
/// `EmptyGraph` if the graph has no nodes.
pub fn random_walk<R: RandomSource + ?Sized>(graph: &WordGraph, source: &mut R) -> Result<Walk> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let start_index = source.below(nodes.len());
    let mut current = nodes.get(start_index).copied().ok_or(GraphError::EmptyGraph)?;
    let mut walk = vec![current.to_string()];
    let mut visited: HashSet<(&str, &str)> = HashSet::new();

    let stop = loop {
        let Some(next) = choose_next(graph, current, source) else {
            break WalkStop::DeadEnd;
        };
        if !visited.insert((current, next)) {
            break WalkStop::RepeatedEdge {
                from: current.to_string(),
                to: next.to_string(),
            };
        }
        walk.push(next.to_string());
        current = next;
    };

    tracing::debug!(steps = walk.len() - 1, ?stop, "random walk finished");
    Ok(Walk { nodes: walk, stop })
}

/// Weighted pick over the sorted successors of `node`; `None` at a dead end.
fn choose_next<'g, R: RandomSource + ?Sized>(
    graph: &'g WordGraph,
    node: &str,
    source: &mut R,
) -> Option<&'g str> {
    let successors = graph.successors(node);
    let total: usize = successors.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }

    let draw = source.below(total);
    let mut cumulative = 0;
    for (dest, weight) in &successors {
        cumulative += *weight;
        if draw < cumulative {
            return Some(*dest);
        }
    }
    successors.last().map(|(dest, _)| *dest)
}
