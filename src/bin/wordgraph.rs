use clap::Parser;
use colored::Colorize;
use wordgraph_core::cli::{self, Cli};
use wordgraph_core::exit::WordGraphExit;
use wordgraph_core::logging;

fn main() -> WordGraphExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if cli.command.is_some() {
        cli::dispatch::execute(cli)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(WordGraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            WordGraphExit::Error
        }
    }
}
