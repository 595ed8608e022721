//! Command handlers for the CLI.

mod completions;
mod list;
mod resolve;
mod search;
mod show;
mod tags;

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::config::Config;
use crate::dataset::Dataset;
use crate::domain::Tag;

// Re-export public items
pub use completions::handle_completions;
pub use list::handle_list;
pub use resolve::{ResolveResult, resolve_ruling};
pub use search::handle_search;
pub use show::handle_show;
pub use tags::handle_tags;

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the dataset named by the resolved data path, or the bundled one.
pub(crate) fn load_dataset(data_path: Option<&Path>, verbose: bool) -> Result<Dataset> {
    let dataset = match data_path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => Dataset::bundled().context("failed to parse bundled dataset")?,
    };

    if verbose {
        match data_path {
            Some(path) => eprintln!("Loaded {} rulings from {}", dataset.len(), path.display()),
            None => eprintln!("Loaded {} rulings from bundled dataset", dataset.len()),
        }
    }

    Ok(dataset)
}

/// Parses an optional `--tag` argument into a tag filter value.
pub(crate) fn parse_tag_arg(tag: Option<&str>) -> Result<Option<Tag>> {
    match tag {
        Some(s) => Tag::new(s)
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid tag '{}': {}", s, e)),
        None => Ok(None),
    }
}

/// Resolves the fuzzy tolerance and validates its range.
pub(crate) fn resolve_threshold(config: &Config, cli_threshold: Option<f64>) -> Result<f64> {
    let threshold = config.threshold(cli_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("threshold must be between 0 and 1, got {}", threshold);
    }
    Ok(threshold)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
