//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single ruling in listing output.
#[derive(Debug, Serialize)]
pub struct RulingListing {
    pub reference: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// A search match with its relevance score.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub reference: String,
    pub date: String,
    pub summary: String,
    pub score: f64,
    pub tags: Vec<String>,
}

/// A tag with optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}
