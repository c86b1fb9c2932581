//! Built-in level definitions for the batch importer.

use crate::select::SelectionPolicy;

#[derive(Debug, Clone, Copy)]
pub struct LevelPreset {
    pub id: &'static str,
    pub title: &'static str,
    pub themes: &'static [&'static str],
    pub rating_range: (i32, i32),
    pub max_candidates: usize,
    pub notes: &'static str,
}

impl LevelPreset {
    /// Selection for this level: any of its themes, exact match.
    pub fn policy(&self) -> SelectionPolicy {
        let (min, max) = self.rating_range;
        SelectionPolicy::any(self.themes.iter().copied(), min, max, self.max_candidates)
    }

    /// File name the level's candidates are written to.
    pub fn candidates_file_name(&self) -> String {
        format!("{}_candidates.json", self.id)
    }
}

const BEGINNER: (i32, i32) = (600, 800);
const CANDIDATES_PER_LEVEL: usize = 50;

const fn level(
    id: &'static str,
    title: &'static str,
    themes: &'static [&'static str],
    notes: &'static str,
) -> LevelPreset {
    LevelPreset {
        id,
        title,
        themes,
        rating_range: BEGINNER,
        max_candidates: CANDIDATES_PER_LEVEL,
        notes,
    }
}

pub const LEVELS: &[LevelPreset] = &[
    level(
        "level_0001",
        "Check vs. Checkmate",
        &["mate", "mateIn1", "mateIn2"],
        "Focus on recognizing checkmate vs just check",
    ),
    level(
        "level_0002",
        "Pawn Promotion",
        &["promotion", "advancedPawn", "endgame"],
        "Puzzles where pawn promotion is key to winning",
    ),
    level(
        "level_0003",
        "Stopping Check 1 - Capture",
        &["capturingDefender", "defensiveMove", "hangingPiece"],
        "Escape check by capturing the attacking piece",
    ),
    level(
        "level_0004",
        "Stopping Check 2 - Block",
        &["intermezzo", "defensiveMove", "interference"],
        "Block the check with another piece",
    ),
    level(
        "level_0005",
        "Stopping Check 3 - Move",
        &["kingSafety", "exposedKing", "escapingCheck"],
        "Move the king to safety",
    ),
    level(
        "level_0006",
        "Checkmate in 1 with Queen",
        &["mateIn1", "queenEndgame", "attackingF2F7"],
        "Simple queen checkmates",
    ),
    level(
        "level_0007",
        "Bishop Practice",
        &["bishopEndgame", "long", "attraction"],
        "Tactical patterns with bishops",
    ),
    level(
        "level_0008",
        "Checkmate in 1 with Queen (Part 2)",
        &["mateIn1", "queenEndgame", "smotheredMate"],
        "More advanced queen checkmates",
    ),
    level(
        "level_0009",
        "Knight Practice",
        &["knightEndgame", "fork", "doubleCheck"],
        "Basic knight tactics",
    ),
    level(
        "level_0010",
        "Checkmate in 1 with Rook",
        &["mateIn1", "rookEndgame", "backRankMate"],
        "Simple rook checkmates",
    ),
];

pub fn find_level(id: &str) -> Option<&'static LevelPreset> {
    LEVELS.iter().find(|l| l.id == id)
}
