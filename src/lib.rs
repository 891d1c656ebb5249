//! Directed word-adjacency graphs built from plain text, with bridge-word
//! lookup, bridge-word text augmentation, shortest paths and weighted random
//! walks.
//!
//! ```
//! use wordgraph_core::graph::{self, WordGraph};
//!
//! let g = WordGraph::from_text("the scientist writes a book");
//! let path = graph::shortest_path(&g, "the", "book").unwrap();
//! assert_eq!(path.weight, 4);
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod render;
pub mod reporting;
pub mod tokens;
