//! Isolated test environment with temp directory.

use super::{FirelexCommand, TestRuling};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment holding a dataset file in a temp directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for writing test datasets and running the CLI
/// against them.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the dataset JSON file
    data_path: PathBuf,
}

impl TestEnv {
    /// Creates a test environment with a dataset built from the given rulings.
    pub fn with_rulings(rulings: &[TestRuling]) -> Self {
        let records: Vec<serde_json::Value> = rulings.iter().map(TestRuling::to_json).collect();
        let json = serde_json::to_string_pretty(&records).expect("Failed to render dataset");
        Self::with_json(&json)
    }

    /// Creates a test environment with a raw dataset file.
    ///
    /// Useful for malformed-data tests.
    pub fn with_json(json: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_path = temp_dir.path().join("rulings.json");
        std::fs::write(&data_path, json).expect("Failed to write dataset file");
        Self {
            _temp_dir: temp_dir,
            data_path,
        }
    }

    /// Returns the path to the dataset file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Creates a FirelexCommand configured for this test environment.
    pub fn cmd(&self) -> FirelexCommand {
        FirelexCommand::new().data(&self.data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 1: TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_writes_dataset_file() {
        let env = TestEnv::with_rulings(&[TestRuling::new("Some Ruling")]);
        assert!(env.data_path().exists(), "dataset file should exist");
        let contents = std::fs::read_to_string(env.data_path()).unwrap();
        assert!(contents.contains("Some Ruling"));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::with_rulings(&[]);
            env.data_path().to_path_buf()
        };
        // After env is dropped, the temp directory should be cleaned up
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::with_rulings(&[]);
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--data");
        assert_eq!(args[1], env.data_path().to_string_lossy());
    }
}
