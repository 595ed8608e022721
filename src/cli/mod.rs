//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// firelex - browse and fuzzy-search fire-safety interpretation rulings
#[derive(Parser, Debug)]
#[command(name = "firelex", version, about, long_about = None)]
pub struct Cli {
    /// Dataset JSON file (overrides config file and the bundled data)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search rulings by free text, optionally filtered by tag
    Search(SearchArgs),

    /// List all rulings, optionally filtered by tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a ruling's full text
    Show(ShowArgs),

    /// List category tags
    Tags(TagsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Keep only rulings carrying this tag (exact token match)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Use exact substring matching instead of fuzzy matching
    #[arg(long)]
    pub exact: bool,

    /// Fuzzy tolerance: 0 accepts exact matches only, 1 accepts anything
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Score the whole field instead of the best-matching window
    #[arg(long)]
    pub whole_field: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Keep only rulings carrying this tag (exact token match)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Reference number, or a unique prefix of one
    pub reference: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show ruling counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
