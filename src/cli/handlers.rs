// src/cli/handlers.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::Session;
use crate::error::GraphError;
use crate::exit::WordGraphExit;
use crate::graph::{self, RandomSource, SeededSource};
use crate::render;
use crate::reporting;
use crate::tokens::normalize_word;

/// Prints an expected query outcome and maps it to an exit code. Anything
/// else is a real failure and propagates.
fn report_outcome(err: GraphError) -> Result<WordGraphExit> {
    if err.is_query_outcome() {
        reporting::print_query_error(&err);
        Ok(WordGraphExit::for_error(&err))
    } else {
        Err(err.into())
    }
}

/// Handles the show command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_show(session: &Session, json: bool) -> Result<WordGraphExit> {
    if json {
        let out = serde_json::to_string_pretty(&session.graph.snapshot())?;
        println!("{out}");
    } else {
        reporting::print_graph(&session.graph);
    }
    Ok(WordGraphExit::Success)
}

/// Handles the render command.
///
/// # Errors
/// Returns error if the diagram cannot be written.
pub fn handle_render(
    session: &Session,
    output: Option<&Path>,
    html: bool,
    highlight: Option<(&str, &str)>,
) -> Result<WordGraphExit> {
    let path = match highlight {
        Some((from, to)) => match graph::shortest_path(&session.graph, from, to) {
            Ok(p) => Some(p),
            Err(e) if e.is_query_outcome() => {
                tracing::warn!("rendering without highlight: {e}");
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let svg = render::render_svg(&session.graph, &session.config.render, path.as_ref());
    let svg_path = output.map_or_else(
        || PathBuf::from(&session.config.output.svg_path),
        Path::to_path_buf,
    );
    write_file(&svg_path, &svg)?;
    println!("{} {}", "Wrote".green(), svg_path.display());

    if html {
        let html_path = PathBuf::from(&session.config.output.html_path);
        write_file(&html_path, &render::wrap_html(&svg))?;
        println!("{} {}", "Wrote".green(), html_path.display());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
///
/// # Errors
/// Only for failures other than query outcomes.
pub fn handle_bridge(session: &Session, first: &str, second: &str) -> Result<WordGraphExit> {
    match graph::bridge_words(&session.graph, first, second) {
        Ok(words) => {
            reporting::print_bridges(&normalize_word(first), &normalize_word(second), &words);
            Ok(WordGraphExit::Success)
        }
        Err(e) => report_outcome(e),
    }
}

/// Handles the augment command.
///
/// # Errors
/// Does not currently fail.
pub fn handle_augment(
    session: &Session,
    text: &str,
    random: bool,
    seed: Option<u64>,
) -> Result<WordGraphExit> {
    let augmented = if random {
        let mut source = SeededSource::new(seed.or(session.config.walk.seed));
        graph::augment_with(&session.graph, text, |candidates| {
            source.below(candidates.len())
        })
    } else {
        graph::augment(&session.graph, text)
    };
    println!("{augmented}");
    Ok(WordGraphExit::Success)
}

/// Handles the path command.
///
/// # Errors
/// Only for failures other than query outcomes.
pub fn handle_path(session: &Session, start: &str, end: Option<&str>) -> Result<WordGraphExit> {
    let result = match end {
        Some(end) => graph::shortest_path(&session.graph, start, end)
            .map(|p| reporting::print_path(&p)),
        None => graph::shortest_paths_from(&session.graph, start)
            .map(|paths| reporting::print_paths(start, &paths)),
    };
    match result {
        Ok(()) => Ok(WordGraphExit::Success),
        Err(e) => report_outcome(e),
    }
}

/// Handles the walk command.
///
/// # Errors
/// Returns error if the walk file cannot be written.
pub fn handle_walk(
    session: &Session,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<WordGraphExit> {
    let mut source = SeededSource::new(seed.or(session.config.walk.seed));
    let walk = match graph::random_walk(&session.graph, &mut source) {
        Ok(walk) => walk,
        Err(e) => return report_outcome(e),
    };

    reporting::print_walk(&walk);
    if let Some(path) = output {
        write_file(path, &format!("{}\n", walk.to_text()))?;
        println!("{} {}", "Wrote".green(), path.display());
    }
    Ok(WordGraphExit::Success)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
