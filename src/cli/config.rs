//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::search::DEFAULT_THRESHOLD;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default dataset JSON file
    pub data: Option<PathBuf>,

    /// Default fuzzy tolerance (0.0 - 1.0)
    pub threshold: Option<f64>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/firelex/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("firelex")
            .join("config.toml")
    }

    /// Resolve the dataset path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--data` argument
    /// 2. Config file `data` setting
    /// 3. None (use the bundled dataset)
    pub fn data_path(&self, cli_data: Option<&PathBuf>) -> Option<PathBuf> {
        cli_data.cloned().or_else(|| self.data.clone())
    }

    /// Resolve the fuzzy tolerance.
    ///
    /// Precedence order:
    /// 1. CLI `--threshold` argument
    /// 2. Config file `threshold` setting
    /// 3. Built-in default
    pub fn threshold(&self, cli_threshold: Option<f64>) -> f64 {
        cli_threshold
            .or(self.threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }
}
