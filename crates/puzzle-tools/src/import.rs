//! Dataset → candidates file, shared by both importers.

use std::path::{Path, PathBuf};

use clap::Args;
use puzzle_core::{select, shape, CandidateRecord, MatchMode, PuzzleError, SelectionPolicy};
use tracing::{info, warn};

use crate::error::ToolError;
use crate::files;
use crate::prompt::Prompter;

pub const DEFAULT_THEME: &str = "mate";
pub const DEFAULT_MIN_RATING: i32 = 600;
pub const DEFAULT_MAX_RATING: i32 = 800;
pub const DEFAULT_MAX_CANDIDATES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub found: usize,
    /// `None` when nothing matched and no file was written
    pub written: Option<PathBuf>,
}

/// Select candidates with `policy` and write them for review at `path`.
/// An empty selection is reported, not written.
pub fn import_candidates(
    records: &[CandidateRecord],
    policy: &SelectionPolicy,
    path: &Path,
) -> Result<ImportOutcome, ToolError> {
    let selected = select::select(records, policy);
    let found = selected.len();

    if found == 0 {
        warn!(themes = ?policy.themes, "No puzzles matched");
        return Ok(ImportOutcome { found, written: None });
    }

    let candidates = shape::shape_all(selected);
    files::write_json_pretty(path, &candidates)?;
    info!(found, path = %path.display(), "Wrote candidates");

    Ok(ImportOutcome {
        found,
        written: Some(path.to_path_buf()),
    })
}

/// A custom import: where to write and what to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomImport {
    pub output_name: String,
    pub policy: SelectionPolicy,
}

/// Custom import settings given on the command line.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCriteria {
    /// Output name, written as <name>_candidates.json
    #[arg(long)]
    pub name: Option<String>,

    /// Themes to search for
    #[arg(long, num_args = 1..)]
    pub themes: Vec<String>,

    #[arg(long)]
    pub min_rating: Option<i32>,

    #[arg(long)]
    pub max_rating: Option<i32>,

    /// 0 = no limit
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Require every theme instead of any
    #[arg(long)]
    pub match_all: bool,
}

impl ImportCriteria {
    /// Whether any setting was given, i.e. whether to skip the prompts.
    pub fn is_given(&self) -> bool {
        self.name.is_some()
            || !self.themes.is_empty()
            || self.min_rating.is_some()
            || self.max_rating.is_some()
            || self.max_candidates.is_some()
            || self.match_all
    }

    /// Fill in defaults for whatever was left out.
    pub fn into_custom_import(self, default_name: String) -> CustomImport {
        let themes = if self.themes.is_empty() {
            vec![DEFAULT_THEME.to_string()]
        } else {
            self.themes
        };
        let mode = if self.match_all {
            MatchMode::All
        } else {
            MatchMode::Any
        };

        CustomImport {
            output_name: self.name.unwrap_or(default_name),
            policy: SelectionPolicy::any(
                themes,
                self.min_rating.unwrap_or(DEFAULT_MIN_RATING),
                self.max_rating.unwrap_or(DEFAULT_MAX_RATING),
                self.max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES),
            )
            .with_mode(mode),
        }
    }
}

/// Default output name for a custom import started at `now`.
pub fn timestamped_name(now: chrono::NaiveDateTime) -> String {
    format!("custom_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Ask for every custom import setting, with defaults for blank answers.
pub fn prompt_custom_import<R, W>(
    prompter: &mut Prompter<R, W>,
    default_name: &str,
) -> Result<CustomImport, ToolError>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let output_name =
        prompter.ask_or("\nOutput filename (e.g., 'forks_800-1000'): ", default_name)?;

    prompter.say("\nTHEMES:")?;
    prompter.say("Common themes: mate, mateIn1, mateIn2, fork, pin, skewer, discoveredAttack,")?;
    prompter.say("              backRankMate, promotion, queenEndgame, rookEndgame, etc.")?;
    prompter.say("See: https://database.lichess.org/#puzzles")?;
    let themes: Vec<String> = match prompter.ask("\nEnter themes (space-separated): ")? {
        Some(line) => line.split_whitespace().map(String::from).collect(),
        None => vec![DEFAULT_THEME.to_string()],
    };

    prompter.say("\nRATING RANGE:")?;
    prompter.say("Difficulty guide: 600-800 (beginner), 800-1200 (intermediate),")?;
    prompter.say("                  1200-1600 (advanced), 1600+ (expert)")?;
    let min_rating = prompter.ask_parsed(
        "minimum rating",
        &format!("\nMinimum rating [{DEFAULT_MIN_RATING}]: "),
        DEFAULT_MIN_RATING,
    )?;
    let max_rating = prompter.ask_parsed(
        "maximum rating",
        &format!("Maximum rating [{DEFAULT_MAX_RATING}]: "),
        DEFAULT_MAX_RATING,
    )?;

    let max_candidates = prompter.ask_parsed(
        "max puzzles",
        &format!("\nMax puzzles to generate [{DEFAULT_MAX_CANDIDATES}] (0 = no limit): "),
        DEFAULT_MAX_CANDIDATES,
    )?;

    prompter.say("\nTHEME MATCHING:")?;
    prompter.say("  1. ANY - Puzzle has at least one of the themes (more results)")?;
    prompter.say("  2. ALL - Puzzle has all the themes (fewer, more specific results)")?;
    let match_mode = match prompter.ask("\nMatch mode (1=ANY, 2=ALL) [1]: ")?.as_deref() {
        None | Some("1") => MatchMode::Any,
        Some("2") => MatchMode::All,
        Some(other) => {
            return Err(ToolError::InvalidAnswer {
                field: "match mode",
                value: other.to_string(),
            })
        }
    };

    let policy = SelectionPolicy::any(themes, min_rating, max_rating, max_candidates)
        .with_mode(match_mode);

    Ok(CustomImport { output_name, policy })
}

/// Whether a load error means the dataset is simply absent.
pub fn is_missing_dataset(err: &PuzzleError) -> bool {
    matches!(err, PuzzleError::DatasetNotFound(_))
}
