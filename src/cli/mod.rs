// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod shell;

pub use args::{Cli, Commands};

use crate::config::Config;
use crate::graph::WordGraph;

/// Everything a command needs: the loaded graph and the active config.
#[derive(Debug, Clone)]
pub struct Session {
    pub graph: WordGraph,
    pub config: Config,
}

impl Session {
    #[must_use]
    pub fn new(graph: WordGraph, config: Config) -> Self {
        Self { graph, config }
    }
}
