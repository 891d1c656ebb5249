use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wordgraph",
    version,
    about = "Word-adjacency graph queries over a text corpus"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Corpus text file the graph is built from
    #[arg(long, short, global = true, value_name = "FILE")]
    pub corpus: Option<PathBuf>,
    /// Config file (defaults to ./wordgraph.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the node set and weighted edges
    Show {
        /// Emit the graph as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw the graph as an SVG diagram
    Render {
        /// Output file (defaults to `output.svg_path` from the config)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Also write an HTML page embedding the diagram
        #[arg(long)]
        html: bool,
        /// Highlight the shortest path starting at this word
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Highlight the shortest path ending at this word
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Find the words bridging FIRST to SECOND
    Bridge { first: String, second: String },
    /// Insert bridge words into a sentence
    Augment {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Pick a random bridge word instead of the smallest one
        #[arg(long)]
        random: bool,
        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },
    /// Shortest path from START to END, or to every reachable word
    Path { start: String, end: Option<String> },
    /// Weighted random walk from a random word
    Walk {
        /// Seed for a reproducible walk (overrides `walk.seed`)
        #[arg(long)]
        seed: Option<u64>,
        /// Also write the walk to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Also write the walk to `output.walk_path` from the config
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
    /// Interactive menu over the loaded graph
    Shell,
}
