//! Command dispatch logic extracted from binary to reduce main function size.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use super::{
    args::{Cli, Commands},
    handlers::{
        handle_augment, handle_bridge, handle_path, handle_render, handle_show, handle_walk,
    },
    shell, Session,
};
use crate::config::Config;
use crate::corpus;
use crate::exit::WordGraphExit;

/// Loads the session for `cli` and executes the parsed command.
///
/// # Errors
/// Returns error if the config or corpus cannot be loaded, or the command
/// handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let Some(command) = cli.command else {
        return Err(anyhow!("Internal error: no command to execute"));
    };
    let session = load_session(cli.corpus.as_deref(), cli.config.as_deref())?;
    run(&session, command)
}

/// Builds the session from a corpus file and an optional explicit config.
///
/// # Errors
/// Returns error if no corpus was given, or either file cannot be loaded.
pub fn load_session(corpus_path: Option<&Path>, config_path: Option<&Path>) -> Result<Session> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let Some(corpus_path) = corpus_path else {
        return Err(anyhow!("no corpus given: pass --corpus FILE"));
    };
    let graph = corpus::load_graph(corpus_path)?;
    Ok(Session::new(graph, config))
}

/// Runs one command against an already loaded session.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn run(session: &Session, command: Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Show { .. } | Commands::Render { .. } => handle_output(session, command),

        Commands::Bridge { .. } | Commands::Augment { .. } | Commands::Path { .. } => {
            handle_queries(session, command)
        }

        Commands::Walk { seed, output, save } => {
            let target = output.or_else(|| {
                save.then(|| PathBuf::from(&session.config.output.walk_path))
            });
            handle_walk(session, seed, target.as_deref())
        }
        Commands::Shell => {
            let stdin = std::io::stdin();
            shell::run(session, stdin.lock())
        }
    }
}

fn handle_output(session: &Session, command: Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Show { json } => handle_show(session, json),
        Commands::Render {
            output,
            html,
            from,
            to,
        } => {
            let highlight = from.as_deref().zip(to.as_deref());
            handle_render(session, output.as_deref(), html, highlight)
        }
        _ => Err(anyhow!("Internal error: Invalid output command")),
    }
}

fn handle_queries(session: &Session, command: Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Bridge { first, second } => handle_bridge(session, &first, &second),
        Commands::Augment { text, random, seed } => {
            handle_augment(session, &text.join(" "), random, seed)
        }
        Commands::Path { start, end } => handle_path(session, &start, end.as_deref()),
        _ => Err(anyhow!("Internal error: Invalid query command")),
    }
}
