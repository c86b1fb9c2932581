//! Reviewed candidate → app puzzle.
//!
//! Puzzle lines follow the Lichess convention: the first move is the
//! opponent's (the move that sets up the tactic) and the solver answers it,
//! so even indices are opponent moves and odd indices are solver moves.

use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::error::PuzzleError;
use crate::record::{FinalRecord, InterchangeRecord, SideToMove, SolutionStep};
use crate::tags;

/// Upper rating bound (exclusive) of difficulty tiers 1-4; anything above is 5.
pub const DIFFICULTY_THRESHOLDS: [i32; 4] = [900, 1200, 1500, 1800];

pub fn difficulty_for(rating: i32) -> u8 {
    let below = DIFFICULTY_THRESHOLDS
        .iter()
        .take_while(|&&limit| rating >= limit)
        .count();
    below as u8 + 1
}

/// Comment for the move at `index` of a line of `total` moves.
pub fn move_comment<S: AsRef<str>>(
    index: usize,
    is_user_move: bool,
    total: usize,
    themes: &[S],
) -> &'static str {
    // the last move is usually the winning one, whoever plays it
    if index + 1 == total {
        return tags::final_move_comment(themes);
    }
    match (is_user_move, index) {
        (false, 0) => "Opponent's move",
        (false, _) => "Opponent responds",
        (true, _) => "Continue the sequence",
    }
}

/// Annotate a move line, opponent first.
pub fn build_solution_sequence<S: AsRef<str>>(
    moves: &[String],
    themes: &[S],
) -> Vec<SolutionStep> {
    let total = moves.len();
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| {
            let is_user_move = i % 2 == 1;
            SolutionStep {
                mv: mv.clone(),
                is_user_move,
                comment: move_comment(i, is_user_move, total, themes).to_string(),
            }
        })
        .collect()
}

/// Convert one candidate. `index` is its 1-based position in the batch, used
/// for the id when the candidate has none.
pub fn format_record(
    record: &InterchangeRecord,
    index: usize,
) -> Result<FinalRecord, PuzzleError> {
    let to_move = SideToMove::from_fen(&record.fen)?;
    let themes = &record.themes;

    let solution_sequence = build_solution_sequence(&record.move_sequence, themes);
    let solution_moves = solution_sequence
        .iter()
        .filter(|step| step.is_user_move)
        .map(|step| step.mv.clone())
        .collect();

    let id = match record.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("puzzle_{index:04}"),
    };

    Ok(FinalRecord {
        id,
        title: tags::title_for(themes).to_string(),
        subtitle: tags::subtitle_for(themes, to_move),
        fen: record.fen.clone(),
        to_move,
        themes: themes.clone(),
        difficulty: difficulty_for(record.rating),
        hints: vec![record.hint.clone()],
        success_message: tags::success_message_for(themes).to_string(),
        failure_message: tags::FAILURE_MESSAGE.to_string(),
        solution_moves,
        solution_sequence,
    })
}

/// A candidate that could not be converted.
#[derive(Debug)]
pub struct ConversionFailure {
    /// 1-based position in the input
    pub index: usize,
    pub error: PuzzleError,
    pub raw: Value,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<FinalRecord>,
    pub failures: Vec<ConversionFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }
}

fn convert_value(raw: &Value, index: usize) -> Result<FinalRecord, PuzzleError> {
    let record = InterchangeRecord::deserialize(raw).map_err(PuzzleError::InvalidRecord)?;
    format_record(&record, index)
}

/// Convert a whole candidates file. Bad entries are logged with their raw
/// content and collected in `failures`; the rest still convert.
pub fn convert_batch<I>(records: I) -> BatchReport
where
    I: IntoIterator<Item = Value>,
{
    records
        .into_iter()
        .enumerate()
        .fold(BatchReport::default(), |mut report, (i, raw)| {
            let index = i + 1;
            match convert_value(&raw, index) {
                Ok(puzzle) => report.converted.push(puzzle),
                Err(e) => {
                    error!(index, error = %e, raw = %raw, "Failed to convert puzzle, skipping");
                    report.failures.push(ConversionFailure { index, error: e, raw });
                }
            }
            report
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(fen: &str, moves: &[&str], themes: &[&str], rating: i32) -> InterchangeRecord {
        InterchangeRecord {
            id: Some("puzzle_test".to_string()),
            fen: fen.to_string(),
            move_sequence: moves.iter().map(|m| m.to_string()).collect(),
            themes: themes.iter().map(|t| t.to_string()).collect(),
            rating,
            popularity: 90,
            lichess_url: None,
            hint: "Look for a move that attacks two pieces at once".to_string(),
        }
    }

    const FEN_BLACK: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 4 4";

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(difficulty_for(0), 1);
        assert_eq!(difficulty_for(899), 1);
        assert_eq!(difficulty_for(900), 2);
        assert_eq!(difficulty_for(1199), 2);
        assert_eq!(difficulty_for(1250), 3);
        assert_eq!(difficulty_for(1500), 4);
        assert_eq!(difficulty_for(1799), 4);
        assert_eq!(difficulty_for(1800), 5);
        assert_eq!(difficulty_for(3000), 5);
    }

    #[test]
    fn test_difficulty_monotonic() {
        let mut last = difficulty_for(-100);
        for rating in (-100..3200).step_by(7) {
            let d = difficulty_for(rating);
            assert!(d >= last && (1..=5).contains(&d));
            last = d;
        }
    }

    #[test]
    fn test_two_move_fork() {
        let record = candidate(FEN_BLACK, &["e7e5", "g1f3"], &["fork"], 1000);
        let puzzle = format_record(&record, 1).unwrap();
        assert_eq!(
            puzzle.solution_sequence,
            vec![
                SolutionStep {
                    mv: "e7e5".into(),
                    is_user_move: false,
                    comment: "Opponent's move".into(),
                },
                SolutionStep {
                    mv: "g1f3".into(),
                    is_user_move: true,
                    comment: "Fork! Winning material".into(),
                },
            ]
        );
        assert_eq!(puzzle.solution_moves, vec!["g1f3"]);
        assert_eq!(puzzle.to_move, SideToMove::Black);
    }

    #[test]
    fn test_long_line_comments() {
        let record = candidate(FEN_BLACK, &["a", "b", "c", "d", "e", "f"], &["mateIn3"], 1600);
        let puzzle = format_record(&record, 1).unwrap();
        let comments: Vec<_> = puzzle
            .solution_sequence
            .iter()
            .map(|s| s.comment.as_str())
            .collect();
        assert_eq!(
            comments,
            vec![
                "Opponent's move",
                "Continue the sequence",
                "Opponent responds",
                "Continue the sequence",
                "Opponent responds",
                "Winning move!",
            ]
        );
        assert_eq!(puzzle.solution_moves, vec!["b", "d", "f"]);
        assert_eq!(puzzle.difficulty, 4);
        assert_eq!(puzzle.title, "Checkmate in Three");
        assert_eq!(puzzle.subtitle, "Deliver checkmate for Black");
        assert_eq!(puzzle.success_message, "Excellent! Checkmate!");
    }

    #[test]
    fn test_single_move_gets_final_comment() {
        let record = candidate(FEN_BLACK, &["e7e5"], &["pin"], 800);
        let puzzle = format_record(&record, 1).unwrap();
        assert_eq!(puzzle.solution_sequence[0].comment, "Pinned!");
        assert!(!puzzle.solution_sequence[0].is_user_move);
        assert!(puzzle.solution_moves.is_empty());
    }

    #[test]
    fn test_empty_line() {
        let record = candidate(FEN_BLACK, &[], &[], 800);
        let puzzle = format_record(&record, 1).unwrap();
        assert!(puzzle.solution_sequence.is_empty());
        assert!(puzzle.solution_moves.is_empty());
        assert_eq!(puzzle.title, "Tactical Puzzle");
        assert_eq!(puzzle.subtitle, "Find the best move for Black");
        assert_eq!(puzzle.success_message, "Success!");
    }

    #[test]
    fn test_messages_and_hints() {
        let record = candidate(FEN_BLACK, &["e7e5", "g1f3"], &["fork"], 1000);
        let puzzle = format_record(&record, 1).unwrap();
        assert_eq!(puzzle.title, "Fork");
        assert_eq!(puzzle.subtitle, "Win material with a fork");
        assert_eq!(puzzle.success_message, "Great fork! Material won!");
        assert_eq!(puzzle.failure_message, "Not quite right. Try again!");
        assert_eq!(puzzle.hints, vec![record.hint.clone()]);
        assert_eq!(puzzle.id, "puzzle_test");
    }

    #[test]
    fn test_missing_id_uses_batch_index() {
        let mut record = candidate(FEN_BLACK, &[], &[], 800);
        record.id = None;
        assert_eq!(format_record(&record, 7).unwrap().id, "puzzle_0007");
        record.id = Some(String::new());
        assert_eq!(format_record(&record, 12).unwrap().id, "puzzle_0012");
    }

    #[test]
    fn test_malformed_fen() {
        let record = candidate("8/8/8/8/8/8/8/8", &["e2e4"], &[], 800);
        assert!(matches!(
            format_record(&record, 1),
            Err(PuzzleError::MalformedPosition(_))
        ));
    }

    #[test]
    fn test_convert_batch_collects_failures() {
        let input = vec![
            json!({
                "id": "puzzle_a",
                "fen": FEN_BLACK,
                "moveSequence": ["e7e5", "g1f3"],
                "themes": ["fork"]
            }),
            json!({"id": "puzzle_b", "themes": ["pin"]}),
            json!({"id": "puzzle_c", "fen": "broken"}),
            json!({"fen": FEN_BLACK, "rating": 1900}),
        ];
        let report = convert_batch(input);

        assert_eq!(report.total(), 4);
        let ids: Vec<_> = report.converted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["puzzle_a", "puzzle_0004"]);
        assert_eq!(report.converted[1].difficulty, 5);

        let failed: Vec<_> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(failed, vec![2, 3]);
        assert!(matches!(report.failures[0].error, PuzzleError::InvalidRecord(_)));
        assert!(matches!(report.failures[1].error, PuzzleError::MalformedPosition(_)));
        assert_eq!(report.failures[1].raw["id"], "puzzle_c");
    }

    #[test]
    fn test_convert_batch_default_rating() {
        let report = convert_batch(vec![json!({"fen": FEN_BLACK})]);
        assert_eq!(report.converted[0].difficulty, 1);
        assert_eq!(report.converted[0].hints, vec!["Find the best move"]);
    }
}
