// src/graph/augment.rs
//! Rewrites a sentence by splicing a bridge word between each adjacent pair.

use super::bridge::collect_bridges;
use super::word_graph::WordGraph;
use crate::tokens::Tokenizer;

/// Inserts the lexicographically smallest bridge word between every adjacent
/// pair of words in `text` that has one.
#[must_use]
pub fn augment(graph: &WordGraph, text: &str) -> String {
    augment_with(graph, text, |_| 0)
}

/// Like [`augment`], but `choose` picks the index of the bridge word to insert
/// from the sorted, non-empty candidate list. Out-of-range picks fall back to
/// the first candidate.
pub fn augment_with<F>(graph: &WordGraph, text: &str, mut choose: F) -> String
where
    F: FnMut(&[String]) -> usize,
{
    let tokens = Tokenizer::tokenize(text);
    let mut out: Vec<String> = Vec::with_capacity(tokens.len() * 2);
    let mut inserted = 0usize;

    for pair in tokens.windows(2) {
        let [current, next] = pair else { continue };
        out.push(current.clone());

        if let Some(bridge) = pick_bridge(graph, current, next, &mut choose) {
            out.push(bridge);
            inserted += 1;
        }
    }
    if let Some(last) = tokens.last() {
        out.push(last.clone());
    }

    tracing::debug!(words = tokens.len(), inserted, "augmented text");
    out.join(" ")
}

fn pick_bridge<F>(graph: &WordGraph, current: &str, next: &str, choose: &mut F) -> Option<String>
where
    F: FnMut(&[String]) -> usize,
{
    if !graph.contains(current) || !graph.contains(next) {
        return None;
    }
    let candidates = collect_bridges(graph, current, next);
    if candidates.is_empty() {
        return None;
    }
    let index = choose(&candidates);
    candidates
        .get(index)
        .or_else(|| candidates.first())
        .cloned()
}
