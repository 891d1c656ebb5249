// src/graph/builder.rs
//! Graph construction: one node per distinct word, one weighted edge per
//! adjacent word pair.

use super::word_graph::WordGraph;
use crate::tokens::Tokenizer;

/// Tokenizes raw corpus text and builds its word graph.
#[must_use]
pub fn build_from_text(text: &str) -> WordGraph {
    build_from_tokens(&Tokenizer::tokenize(text))
}

/// Builds the graph for an already tokenized corpus.
///
/// A single-token corpus yields one isolated node; an empty corpus yields an
/// empty graph.
#[must_use]
pub fn build_from_tokens(tokens: &[String]) -> WordGraph {
    let mut graph = WordGraph::new();

    for token in tokens {
        graph.add_node(token);
    }
    for pair in tokens.windows(2) {
        if let [src, dest] = pair {
            graph.add_edge(src, dest);
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built word graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_become_edges() {
        let g = build_from_text("a b a b c");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.weight("a", "b"), Some(2));
        assert_eq!(g.weight("b", "a"), Some(1));
        assert_eq!(g.weight("b", "c"), Some(1));
        assert_eq!(g.total_weight(), 4);
    }

    #[test]
    fn test_degenerate_corpora() {
        assert!(build_from_text("").is_empty());
        assert!(build_from_text("?!, 42").is_empty());

        let single = build_from_text("alone");
        assert_eq!(single.nodes(), vec!["alone"]);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_self_loop() {
        let g = build_from_text("go go go");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.weight("go", "go"), Some(2));
    }
}
