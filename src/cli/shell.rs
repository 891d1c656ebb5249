// src/cli/shell.rs
//! Interactive numbered menu over a loaded graph.

use std::io::BufRead;

use anyhow::Result;
use colored::Colorize;

use super::handlers;
use super::Session;
use crate::exit::WordGraphExit;

const MENU: &str = "\
1. Show graph          2. Render SVG
3. Bridge words        4. Augment text
5. Shortest path       6. Random walk
7. Quit";

/// Runs the menu until the user quits or input ends. Query outcomes are
/// printed and the loop continues; only hard failures abort it.
///
/// # Errors
/// Returns error if reading input or a handler fails.
pub fn run<R: BufRead>(session: &Session, mut input: R) -> Result<WordGraphExit> {
    loop {
        println!("{}", MENU.cyan());
        println!("choose an option:");

        let Some(choice) = read_line(&mut input)? else {
            return Ok(WordGraphExit::Success);
        };
        match choice.trim() {
            "1" => {
                handlers::handle_show(session, false)?;
            }
            "2" => {
                handlers::handle_render(session, None, true, None)?;
            }
            "3" => {
                let Some((first, second)) = read_pair(&mut input)? else {
                    return Ok(WordGraphExit::Success);
                };
                handlers::handle_bridge(session, &first, &second)?;
            }
            "4" => {
                println!("please input the text:");
                let Some(text) = read_line(&mut input)? else {
                    return Ok(WordGraphExit::Success);
                };
                handlers::handle_augment(session, &text, false, None)?;
            }
            "5" => {
                let Some((first, second)) = read_pair(&mut input)? else {
                    return Ok(WordGraphExit::Success);
                };
                let end = Some(second.as_str()).filter(|s| !s.trim().is_empty());
                handlers::handle_path(session, &first, end)?;
            }
            "6" => {
                handlers::handle_walk(session, None, None)?;
            }
            "7" | "q" | "quit" => return Ok(WordGraphExit::Success),
            other => println!("{}", format!("Unknown option: {other}").red()),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_pair<R: BufRead>(input: &mut R) -> Result<Option<(String, String)>> {
    println!("please input the first word:");
    let Some(first) = read_line(input)? else {
        return Ok(None);
    };
    println!("please input the second word:");
    let Some(second) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some((first, second)))
}
