//! Console output formatting for graph dumps and query results.
//!
//! Message builders return plain strings so they can be tested; the
//! `print_*` functions add colour and write to stdout.

use colored::Colorize;

use crate::error::GraphError;
use crate::graph::bridge::join_words;
use crate::graph::{Walk, WalkStop, WordGraph, WordPath};

#[must_use]
pub fn bridge_message(first: &str, second: &str, words: &[String]) -> String {
    let verb = if words.len() == 1 { "is" } else { "are" };
    format!(
        "The bridge words from {first} to {second} {verb}: {}.",
        join_words(words)
    )
}

#[must_use]
pub fn path_message(path: &WordPath) -> String {
    format!("{} (length: {})", path.to_text(), path.weight)
}

#[must_use]
pub fn walk_stop_message(stop: &WalkStop) -> String {
    match stop {
        WalkStop::DeadEnd => "stopped: reached a word with no successors".to_string(),
        WalkStop::RepeatedEdge { from, to } => {
            format!("stopped: edge {from} -> {to} was already traversed")
        }
    }
}

/// Prints the node set and every weighted edge grouped by source.
pub fn print_graph(graph: &WordGraph) {
    println!(
        "{} {} nodes, {} edges, {} word pairs",
        "Graph:".cyan().bold(),
        graph.node_count(),
        graph.edge_count(),
        graph.total_weight()
    );
    println!("{}", "Node Set:".bold());
    println!("  {}", graph.nodes().join(", "));

    let mut current: Option<&str> = None;
    for (src, dest, weight) in graph.edges() {
        if current != Some(src) {
            println!("{} {}", "Node:".bold(), src.cyan());
            current = Some(src);
        }
        println!("  {} {dest} {}", "->".blue(), format!("(weight: {weight})").dimmed());
    }
}

pub fn print_bridges(first: &str, second: &str, words: &[String]) {
    println!("{}", bridge_message(first, second, words).green());
}

pub fn print_path(path: &WordPath) {
    println!("{}", path_message(path).green());
}

pub fn print_paths(start: &str, paths: &[WordPath]) {
    if paths.is_empty() {
        println!("{}", format!("No words reachable from {start}!").yellow());
        return;
    }
    println!(
        "{} {} reachable from {start}",
        "Shortest paths:".cyan().bold(),
        paths.len()
    );
    for path in paths {
        println!("  {}", path_message(path));
    }
}

pub fn print_walk(walk: &Walk) {
    println!("{}", walk.to_text().green());
    println!("  {}", walk_stop_message(&walk.stop).dimmed());
}

/// Prints an expected query outcome such as an unknown word or missing path.
pub fn print_query_error(err: &GraphError) {
    println!("{}", err.to_string().yellow());
}
