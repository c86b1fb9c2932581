//! Records flowing through the pipeline: dataset rows, reviewable candidates
//! and the final puzzle-set entries.

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::tags::FALLBACK_HINT;

/// Rating assumed for a candidate that was hand-edited without one.
pub const DEFAULT_RATING: i32 = 800;

/// Base URL of the Lichess training page for a puzzle id.
pub const LICHESS_TRAINING_URL: &str = "https://lichess.org/training";

/// A single row of the puzzle dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Raw dataset id (no `puzzle_` prefix)
    pub puzzle_id: String,
    pub fen: String,
    /// UCI moves, first one is the opponent's setup move
    pub moves: Vec<String>,
    pub themes: Vec<String>,
    pub rating: i32,
    pub popularity: i32,
}

impl CandidateRecord {
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    /// Themes as they appear in the dataset column.
    pub fn themes_line(&self) -> String {
        self.themes.join(" ")
    }
}

/// A candidate puzzle as written for review, and as read back after curation.
///
/// Everything except `fen` may be missing from hand-edited files; defaults
/// match what the review tool assumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub fen: String,
    #[serde(default)]
    pub move_sequence: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub popularity: i32,
    #[serde(rename = "lichess_url", default, skip_serializing_if = "Option::is_none")]
    pub lichess_url: Option<String>,
    #[serde(default = "default_hint")]
    pub hint: String,
}

fn default_rating() -> i32 {
    DEFAULT_RATING
}

fn default_hint() -> String {
    FALLBACK_HINT.to_string()
}

/// Whose turn it is in the puzzle's starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideToMove {
    White,
    Black,
}

impl SideToMove {
    /// Read the side-to-move field (second token) of a FEN string.
    /// Anything other than `w` is treated as black.
    pub fn from_fen(fen: &str) -> Result<Self, PuzzleError> {
        match fen.split_whitespace().nth(1) {
            Some("w") => Ok(SideToMove::White),
            Some(_) => Ok(SideToMove::Black),
            None => Err(PuzzleError::MalformedPosition(fen.to_string())),
        }
    }

    /// Capitalised name used in display text.
    pub fn player_name(self) -> &'static str {
        match self {
            SideToMove::White => "White",
            SideToMove::Black => "Black",
        }
    }
}

/// One entry of a puzzle's solution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStep {
    #[serde(rename = "move")]
    pub mv: String,
    pub is_user_move: bool,
    pub comment: String,
}

/// A puzzle in the format the app loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub fen: String,
    pub to_move: SideToMove,
    pub themes: Vec<String>,
    /// 1 (easiest) to 5
    pub difficulty: u8,
    pub hints: Vec<String>,
    pub success_message: String,
    pub failure_message: String,
    /// Solver moves only, in order
    pub solution_moves: Vec<String>,
    pub solution_sequence: Vec<SolutionStep>,
}

/// A level's worth of puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSet {
    pub level_id: String,
    pub title: String,
    pub description: String,
    pub puzzles: Vec<FinalRecord>,
}
