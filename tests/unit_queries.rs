// tests/unit_queries.rs
//! Bridge words, text augmentation and shortest paths against known corpora.

use wordgraph_core::error::GraphError;
use wordgraph_core::graph::{self, WordGraph};
use wordgraph_core::tokens::Tokenizer;

const SCIENTIST: &str = "the scientist carefully reads the book the scientist writes a book";
const TREK: &str = "To explore strange new worlds, To seek out new life and new civilizations";

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn test_bridge_words_found() {
    let g = WordGraph::from_text(SCIENTIST);
    assert_eq!(
        graph::bridge_words(&g, "the", "writes").ok(),
        Some(words(&["scientist"]))
    );
    assert_eq!(
        graph::bridge_words(&g, "reads", "scientist").ok(),
        Some(words(&["the"]))
    );
}

#[test]
fn test_no_bridge_words_between_known_words() {
    let g = WordGraph::from_text(SCIENTIST);
    match graph::bridge_words(&g, "the", "book") {
        Err(GraphError::NoBridgeWords { first, second }) => {
            assert_eq!(first, "the");
            assert_eq!(second, "book");
        }
        other => panic!("expected NoBridgeWords, got {other:?}"),
    }
}

#[test]
fn test_unknown_bridge_words() {
    let g = WordGraph::from_text(SCIENTIST);
    let err = graph::bridge_words(&g, "the", "unicorn");
    assert!(matches!(err, Err(GraphError::UnknownWords { .. })));
    assert_eq!(
        err.err().map(|e| e.to_string()).as_deref(),
        Some("No the or unicorn in the graph!")
    );
}

#[test]
fn test_bridge_query_is_deterministic() {
    let g = WordGraph::from_text("a x b a y b a z b");
    let first = graph::bridge_words(&g, "a", "b").ok();
    let second = graph::bridge_words(&g, "a", "b").ok();
    assert_eq!(first, second);
    assert_eq!(first, Some(words(&["x", "y", "z"])));
}

#[test]
fn test_augment_inserts_smallest_bridge() {
    let g = WordGraph::from_text(TREK);
    assert_eq!(
        graph::augment(&g, "Seek to explore new and exciting synergies"),
        "seek to explore strange new life and exciting synergies"
    );
}

#[test]
fn test_augment_preserves_original_tokens() {
    let g = WordGraph::from_text(TREK);
    let input = "explore new, and seek new worlds to explore";
    let original = Tokenizer::tokenize(input);
    let augmented = graph::augment(&g, input);
    let out: Vec<&str> = augmented.split(' ').collect();

    // Original tokens appear in order, and every extra word sits between two
    // of them.
    let mut idx = 0;
    for word in &out {
        if original.get(idx).map(String::as_str) == Some(*word) {
            idx += 1;
        }
    }
    assert_eq!(idx, original.len());
    assert_eq!(out.first().copied(), Some("explore"));
    assert_eq!(out.last().copied(), Some("explore"));
}

#[test]
fn test_shortest_path_through_scientist() {
    let g = WordGraph::from_text(SCIENTIST);
    let path = graph::shortest_path(&g, "the", "a").ok();
    assert_eq!(
        path.as_ref().map(|p| p.nodes.clone()),
        Some(words(&["the", "scientist", "writes", "a"]))
    );
    // the -> scientist occurs twice in the corpus.
    assert_eq!(path.map(|p| p.weight), Some(4));
}

#[test]
fn test_direct_edge_path_equals_edge_weight() {
    let g = WordGraph::from_text(SCIENTIST);
    let path = graph::shortest_path(&g, "the", "scientist").ok();
    assert_eq!(path.map(|p| p.weight), g.weight("the", "scientist"));
}

#[test]
fn test_shortest_path_beats_every_other_route() {
    // Heavy direct edge a -> d (weight 4) versus a -> b -> c -> d (weight 3).
    let g = WordGraph::from_text("a d q a d q a d q a d q a b c d");
    let path = graph::shortest_path(&g, "a", "d").ok();
    assert_eq!(
        path.map(|p| (p.nodes, p.weight)),
        Some((words(&["a", "b", "c", "d"]), 3))
    );
}

#[test]
fn test_path_outcomes_are_distinct() {
    let g = WordGraph::from_text(SCIENTIST);
    assert!(graph::shortest_path(&g, "a", "carefully").is_ok());
    let g = WordGraph::from_text("one two three");
    assert!(matches!(
        graph::shortest_path(&g, "three", "one"),
        Err(GraphError::NoPath { .. })
    ));
    assert!(matches!(
        graph::shortest_path(&g, "one", "four"),
        Err(GraphError::UnknownWords { .. })
    ));
}

#[test]
fn test_single_source_paths() {
    let g = WordGraph::from_text("one two three");
    let paths = graph::shortest_paths_from(&g, "one").unwrap_or_default();
    let rendered: Vec<String> = paths.iter().map(|p| p.to_text()).collect();
    // Sorted by destination: "three" before "two".
    assert_eq!(rendered, vec!["one -> two -> three", "one -> two"]);
}
