//! Lichess puzzle database loader.
//!
//! Reads `lichess_db_puzzle.csv` (PuzzleId, FEN, Moves, Rating,
//! RatingDeviation, Popularity, NbPlays, Themes, GameUrl, OpeningTags).
//! Columns are located through the header, so extra or reordered columns are
//! fine. Rows that cannot be parsed are logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::PuzzleError;
use crate::record::CandidateRecord;

/// Default file name of the dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "lichess_db_puzzle.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-empty data rows seen
    pub rows: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<CandidateRecord>,
    pub stats: LoadStats,
}

/// Column positions of the fields we keep.
struct Columns {
    id: usize,
    fen: usize,
    moves: usize,
    rating: usize,
    popularity: usize,
    themes: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, PuzzleError> {
        let names = split_fields(header.trim_start_matches('\u{feff}'));
        let find = |name: &'static str| {
            names
                .iter()
                .position(|n| n.trim() == name)
                .ok_or(PuzzleError::MissingColumn(name))
        };
        Ok(Self {
            id: find("PuzzleId")?,
            fen: find("FEN")?,
            moves: find("Moves")?,
            rating: find("Rating")?,
            popularity: find("Popularity")?,
            themes: find("Themes")?,
        })
    }

    fn parse_row(&self, line: &str, line_no: usize) -> Result<CandidateRecord, PuzzleError> {
        let fields = split_fields(line);
        let field = |idx: usize, name: &str| {
            fields.get(idx).map(|f| f.trim()).ok_or_else(|| PuzzleError::BadRow {
                line: line_no,
                reason: format!("missing {name}"),
            })
        };
        let int = |idx: usize, name: &str| -> Result<i32, PuzzleError> {
            let raw = field(idx, name)?;
            raw.parse().map_err(|_| PuzzleError::BadRow {
                line: line_no,
                reason: format!("{name} is not an integer: {raw:?}"),
            })
        };

        let puzzle_id = field(self.id, "PuzzleId")?;
        if puzzle_id.is_empty() {
            return Err(PuzzleError::BadRow {
                line: line_no,
                reason: "empty PuzzleId".to_string(),
            });
        }

        Ok(CandidateRecord {
            puzzle_id: puzzle_id.to_string(),
            fen: field(self.fen, "FEN")?.to_string(),
            moves: split_words(field(self.moves, "Moves")?),
            themes: split_words(field(self.themes, "Themes")?),
            rating: int(self.rating, "Rating")?,
            popularity: int(self.popularity, "Popularity")?,
        })
    }
}

fn split_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

/// Split one CSV line, honouring double-quoted fields and `""` escapes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Decode one raw line, without its line ending.
fn decode_line(bytes: &[u8], line_no: usize) -> Result<&str, PuzzleError> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|e| PuzzleError::BadRow {
        line: line_no,
        reason: format!("not valid UTF-8: {e}"),
    })
}

/// Parse the dataset from any reader. The first line must be the header.
///
/// Rows are read as bytes so a row with bad encoding is skipped like any
/// other unreadable row; only I/O failures abort the load.
pub fn read_dataset<R: BufRead>(mut reader: R) -> Result<Dataset, PuzzleError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(PuzzleError::EmptyDataset);
    }
    let columns = Columns::from_header(decode_line(&buf, 1)?)?;

    let mut dataset = Dataset::default();
    // header is line 1
    let mut line_no = 1;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let row = match decode_line(&buf, line_no) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => columns.parse_row(line, line_no),
            Err(e) => Err(e),
        };
        dataset.stats.rows += 1;

        match row {
            Ok(record) => dataset.records.push(record),
            Err(e) => {
                warn!(error = %e, "Skipping dataset row");
                dataset.stats.skipped += 1;
            }
        }
    }

    Ok(dataset)
}

/// Load the dataset from disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, PuzzleError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PuzzleError::DatasetNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let dataset = read_dataset(BufReader::new(file))?;

    info!(
        path = %path.display(),
        loaded = dataset.records.len(),
        skipped = dataset.stats.skipped,
        "Loaded puzzle dataset"
    );
    Ok(dataset)
}
