//! firelex - browse and fuzzy-search fire-safety interpretation rulings

pub mod cli;
pub mod dataset;
pub mod domain;
pub mod search;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_list, handle_search, handle_show, handle_tags},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_path = config.data_path(cli.data.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Search(args) => handle_search(args, data_path.as_deref(), &config, verbose),
        Command::List(args) => handle_list(args, data_path.as_deref(), verbose),
        Command::Show(args) => handle_show(args, data_path.as_deref(), verbose),
        Command::Tags(args) => handle_tags(args, data_path.as_deref(), verbose),
        Command::Completions(args) => handle_completions(args),
    }
}
