//! Tool configuration from environment variables.
//!
//! Paths are relative to the working directory unless set otherwise.
//! `PUZZLE_DB_PATH` points at the Lichess CSV, `PUZZLE_OUTPUT_DIR` at the
//! directory candidate files are written to. Command-line flags win over both.

use std::env;
use std::path::PathBuf;

use puzzle_core::dataset::DEFAULT_DATASET_PATH;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolConfig {
    pub dataset_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ToolConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dataset_path: env::var("PUZZLE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            output_dir: env::var("PUZZLE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        dataset_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = dataset_path {
            self.dataset_path = path;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// `<output_dir>/<name>_candidates.json`
    pub fn candidates_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}_candidates.json"))
    }

    pub fn dataset_exists(&self) -> bool {
        self.dataset_path.exists()
    }
}
