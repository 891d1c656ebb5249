// src/graph/mod.rs
//! Word-adjacency graph and the queries that run against it.

pub mod augment;
pub mod bridge;
pub mod builder;
pub mod path;
pub mod walk;
pub mod word_graph;

pub use augment::{augment, augment_with};
pub use bridge::bridge_words;
pub use path::{shortest_path, shortest_paths_from, WordPath};
pub use walk::{random_walk, RandomSource, ScriptedSource, SeededSource, Walk, WalkStop};
pub use word_graph::{EdgeRecord, GraphSnapshot, WordGraph};
