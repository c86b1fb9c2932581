//! Pipeline error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Malformed position string: {0:?}")]
    MalformedPosition(String),

    #[error("Invalid puzzle record: {0}")]
    InvalidRecord(#[source] serde_json::Error),

    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Dataset header is missing column {0}")]
    MissingColumn(&'static str),

    #[error("Dataset is empty (no header row)")]
    EmptyDataset,

    #[error("Row {line}: {reason}")]
    BadRow { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
