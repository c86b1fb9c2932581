//! Puzzle set pipeline.
//!
//! Filters the Lichess puzzle dataset into candidate files for review, then
//! turns reviewed candidates into the puzzle-set documents the app loads.
//! The stages are independent: `select` → `shape` → `format`, with
//! `format::convert_batch` driving the last stage over a whole file.

pub mod dataset;
pub mod error;
pub mod format;
pub mod levels;
pub mod record;
pub mod select;
pub mod shape;
pub mod tags;

pub use error::PuzzleError;
pub use record::{
    CandidateRecord, FinalRecord, InterchangeRecord, PuzzleSet, SideToMove, SolutionStep,
};
pub use select::{select, MatchMode, SelectionPolicy, TagMatching};
