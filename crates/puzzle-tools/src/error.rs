//! Tool error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("No file specified")]
    NoInputFile,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidAnswer { field: &'static str, value: String },

    #[error("Expected a JSON array of puzzles in {}", .0.display())]
    NotAnArray(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
