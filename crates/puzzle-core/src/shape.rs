//! Dataset row → reviewable candidate.

use crate::record::{CandidateRecord, InterchangeRecord, LICHESS_TRAINING_URL};
use crate::tags;

/// Build the candidate written out for review.
pub fn shape(record: &CandidateRecord) -> InterchangeRecord {
    InterchangeRecord {
        id: Some(format!("puzzle_{}", record.puzzle_id)),
        fen: record.fen.clone(),
        move_sequence: record.moves.clone(),
        themes: record.themes.clone(),
        rating: record.rating,
        popularity: record.popularity,
        lichess_url: Some(format!("{LICHESS_TRAINING_URL}/{}", record.puzzle_id)),
        hint: tags::hint_for(&record.themes).to_string(),
    }
}

/// Shape every selected record, keeping selection order.
pub fn shape_all<'a, I>(records: I) -> Vec<InterchangeRecord>
where
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    records.into_iter().map(shape).collect()
}
