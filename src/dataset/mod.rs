//! Dataset loading and lookup.
//!
//! The dataset is a JSON array of rulings, either compiled into the binary
//! or supplied as a file path. It is loaded once per invocation, validated
//! record-by-record during deserialization, and never mutated afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Ruling, Tag};

/// The ruling collection shipped with the binary.
static BUNDLED_RULINGS: &str = include_str!("../../data/rulings.json");

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON was malformed or contained an invalid record.
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// A tag with the number of rulings carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWithCount {
    tag: Tag,
    count: usize,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(tag: Tag, count: usize) -> Self {
        Self { tag, count }
    }

    /// Returns the tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the number of rulings carrying this tag.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// The immutable in-memory ruling collection.
///
/// Rulings keep the order of the source file; that order is what "dataset
/// order" means everywhere else in the crate.
#[derive(Debug, Clone)]
pub struct Dataset {
    rulings: Vec<Ruling>,
}

impl Dataset {
    /// Parses the dataset compiled into the binary.
    pub fn bundled() -> DatasetResult<Self> {
        Self::from_json(BUNDLED_RULINGS)
    }

    /// Loads a dataset from a JSON file.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parses a dataset from a JSON string.
    ///
    /// Malformed records are rejected here, at load time; the filter never
    /// sees an invalid ruling.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let rulings: Vec<Ruling> = serde_json::from_str(json)?;
        Ok(Self { rulings })
    }

    /// Returns all rulings in dataset order.
    pub fn rulings(&self) -> &[Ruling] {
        &self.rulings
    }

    /// Returns the number of rulings.
    pub fn len(&self) -> usize {
        self.rulings.len()
    }

    /// Returns true if the dataset holds no rulings.
    pub fn is_empty(&self) -> bool {
        self.rulings.is_empty()
    }

    /// Finds a ruling by exact reference number.
    pub fn find_by_reference(&self, reference: &str) -> Option<&Ruling> {
        self.rulings
            .iter()
            .find(|r| r.reference().as_str() == reference)
    }

    /// Finds rulings whose reference number starts with the given prefix.
    ///
    /// An empty prefix returns an empty result.
    pub fn find_by_reference_prefix(&self, prefix: &str) -> Vec<&Ruling> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.rulings
            .iter()
            .filter(|r| r.reference().has_prefix(prefix))
            .collect()
    }

    /// Returns the tag vocabulary with per-tag ruling counts, sorted by token.
    pub fn tags(&self) -> Vec<TagWithCount> {
        let mut counts: BTreeMap<Tag, usize> = BTreeMap::new();
        for ruling in &self.rulings {
            for tag in ruling.tags() {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(tag, count)| TagWithCount::new(tag, count))
            .collect()
    }
}
