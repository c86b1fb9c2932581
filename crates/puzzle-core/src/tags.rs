//! Theme-keyed text tables.
//!
//! Two kinds of lookup live here. Hints and titles are keyed by a single
//! theme and resolved in the puzzle's own theme order. Subtitles, success
//! messages and the final-move comment are priority rules: the first rule
//! sharing a theme with the puzzle wins, whatever order the puzzle lists its
//! themes in.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::record::SideToMove;

pub const FALLBACK_HINT: &str = "Find the best move";
pub const FALLBACK_TITLE: &str = "Tactical Puzzle";
pub const FALLBACK_SUCCESS: &str = "Success!";
pub const FALLBACK_FINAL_COMMENT: &str = "Winning move!";
pub const FAILURE_MESSAGE: &str = "Not quite right. Try again!";

/// Placeholder substituted with "White" or "Black" in subtitles.
const PLAYER: &str = "{player}";

pub const THEME_HINTS: &[(&str, &str)] = &[
    ("fork", "Look for a move that attacks two pieces at once"),
    ("pin", "Can you trap a piece against a more valuable one?"),
    ("skewer", "Attack the valuable piece to win the one behind it"),
    ("backRankMate", "The back rank looks vulnerable..."),
    ("mate", "You can checkmate in this position!"),
    ("mateIn1", "Checkmate in one move!"),
    ("mateIn2", "Checkmate in two moves!"),
    ("mateIn3", "Find the checkmate sequence!"),
    ("hangingPiece", "A piece is undefended..."),
    ("promotion", "Can you promote a pawn?"),
    ("exposedKing", "The enemy king is exposed!"),
    ("kingSafety", "Think about king safety"),
    ("defensiveMove", "How can you defend?"),
    ("discoveredAttack", "Move one piece to reveal another's attack"),
    ("doubleCheck", "Give check with two pieces at once!"),
    ("queenEndgame", "Use your queen effectively"),
    ("rookEndgame", "Rook power!"),
    ("bishopEndgame", "Control those diagonals"),
    ("knightEndgame", "Knights are tricky!"),
    ("sacrifice", "Sometimes you must give to receive"),
    ("attackingF2F7", "The f2/f7 square is weak"),
    ("attraction", "Lure the piece to a bad square"),
    ("deflection", "Move the defender away"),
    ("clearance", "Clear the path for your attack"),
    ("interference", "Block the defender's line"),
];

pub const THEME_TITLES: &[(&str, &str)] = &[
    ("mateIn1", "Checkmate in One"),
    ("mateIn2", "Checkmate in Two"),
    ("mateIn3", "Checkmate in Three"),
    ("mate", "Checkmate"),
    ("fork", "Fork"),
    ("pin", "Pin"),
    ("skewer", "Skewer"),
    ("discoveredAttack", "Discovered Attack"),
    ("doubleCheck", "Double Check"),
    ("promotion", "Pawn Promotion"),
    ("backRankMate", "Back Rank Mate"),
    ("sacrifice", "Sacrifice"),
    ("defensiveMove", "Defensive Move"),
    ("escapingCheck", "Escaping Check"),
    ("hangingPiece", "Hanging Piece"),
    ("attraction", "Attraction"),
    ("deflection", "Deflection"),
    ("clearance", "Clearance"),
    ("interference", "Interference"),
];

/// A text chosen when the puzzle has any of `themes`.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRule {
    pub themes: &'static [&'static str],
    pub text: &'static str,
}

const fn rule(themes: &'static [&'static str], text: &'static str) -> ThemeRule {
    ThemeRule { themes, text }
}

const ANY_MATE: &[&str] = &["mate", "mateIn1", "mateIn2", "mateIn3"];

pub const SUBTITLE_RULES: &[ThemeRule] = &[
    rule(ANY_MATE, "Deliver checkmate for {player}"),
    rule(&["fork"], "Win material with a fork"),
    rule(&["pin"], "Pin the opponent's piece"),
    rule(&["skewer"], "Skewer to win material"),
    rule(&["promotion"], "Promote the pawn"),
    rule(&["defensiveMove", "escapingCheck"], "Get out of check"),
    rule(&["hangingPiece"], "Capture the hanging piece"),
];

const FALLBACK_SUBTITLE: &str = "Find the best move for {player}";

pub const SUCCESS_RULES: &[ThemeRule] = &[
    rule(ANY_MATE, "Excellent! Checkmate!"),
    rule(&["fork"], "Great fork! Material won!"),
    rule(&["pin"], "Perfect pin!"),
    rule(&["promotion"], "Excellent promotion!"),
];

/// Comment on the last move of the line. Note mateIn3 is not a mate here.
pub const FINAL_MOVE_RULES: &[ThemeRule] = &[
    rule(&["mate", "mateIn1", "mateIn2"], "Checkmate!"),
    rule(&["fork"], "Fork! Winning material"),
    rule(&["pin"], "Pinned!"),
    rule(&["skewer"], "Skewer! The king must move"),
    rule(&["discoveredAttack"], "Discovered attack!"),
    rule(&["promotion"], "Promotion!"),
];

static HINTS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| THEME_HINTS.iter().copied().collect());

static TITLES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| THEME_TITLES.iter().copied().collect());

fn first_keyed<S: AsRef<str>>(
    table: &HashMap<&'static str, &'static str>,
    themes: &[S],
) -> Option<&'static str> {
    themes.iter().find_map(|t| table.get(t.as_ref()).copied())
}

fn first_rule<S: AsRef<str>>(rules: &[ThemeRule], themes: &[S]) -> Option<&'static str> {
    rules
        .iter()
        .find(|r| themes.iter().any(|t| r.themes.contains(&t.as_ref())))
        .map(|r| r.text)
}

/// Hint for the first of the puzzle's themes that has one.
pub fn hint_for<S: AsRef<str>>(themes: &[S]) -> &'static str {
    first_keyed(&HINTS, themes).unwrap_or(FALLBACK_HINT)
}

/// Title for the first of the puzzle's themes that has one.
pub fn title_for<S: AsRef<str>>(themes: &[S]) -> &'static str {
    first_keyed(&TITLES, themes).unwrap_or(FALLBACK_TITLE)
}

pub fn subtitle_for<S: AsRef<str>>(themes: &[S], side: SideToMove) -> String {
    first_rule(SUBTITLE_RULES, themes)
        .unwrap_or(FALLBACK_SUBTITLE)
        .replace(PLAYER, side.player_name())
}

pub fn success_message_for<S: AsRef<str>>(themes: &[S]) -> &'static str {
    first_rule(SUCCESS_RULES, themes).unwrap_or(FALLBACK_SUCCESS)
}

pub fn final_move_comment<S: AsRef<str>>(themes: &[S]) -> &'static str {
    first_rule(FINAL_MOVE_RULES, themes).unwrap_or(FALLBACK_FINAL_COMMENT)
}
