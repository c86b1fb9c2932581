//! Candidates file → puzzle set document.

use std::path::PathBuf;

use puzzle_core::format::convert_batch;
use puzzle_core::PuzzleSet;
use tracing::info;

use crate::error::ToolError;
use crate::files;
use crate::prompt::Prompter;

pub const DEFAULT_LEVEL_ID: &str = "0001";
pub const DEFAULT_TITLE: &str = "Tactical Puzzles";
pub const DEFAULT_DESCRIPTION: &str = "Practice tactical patterns";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input_file: PathBuf,
    pub level_id: String,
    pub title: String,
    pub description: String,
    pub output_file: PathBuf,
}

impl ConvertRequest {
    /// Fill in defaults for whatever wasn't given.
    pub fn new(
        input_file: PathBuf,
        level_id: Option<String>,
        title: Option<String>,
        description: Option<String>,
        output_file: Option<PathBuf>,
    ) -> Self {
        let level_id = level_id.unwrap_or_else(|| DEFAULT_LEVEL_ID.to_string());
        let output_file = output_file.unwrap_or_else(|| default_output_file(&level_id));
        Self {
            input_file,
            level_id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            output_file,
        }
    }
}

pub fn default_output_file(level_id: &str) -> PathBuf {
    PathBuf::from(format!("puzzle_set_{level_id}.json"))
}

/// Ask for the input file and set metadata. The input file is required and
/// must exist.
pub fn prompt_convert_request<R, W>(
    prompter: &mut Prompter<R, W>,
) -> Result<ConvertRequest, ToolError>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    prompter.say("\nINPUT FILE:")?;
    let input_file = prompter
        .ask("Enter path to puzzles JSON (from review UI or creator): ")?
        .map(PathBuf::from)
        .ok_or(ToolError::NoInputFile)?;
    if !input_file.exists() {
        return Err(ToolError::FileNotFound(input_file));
    }

    prompter.say("\nLEVEL METADATA:")?;
    let level_id = prompter.ask_or("Level ID (e.g., 0001, 0002): ", DEFAULT_LEVEL_ID)?;
    let title = prompter.ask_or("Level Title (e.g., 'Basic Tactics'): ", DEFAULT_TITLE)?;
    let description = prompter.ask_or("Level Description: ", DEFAULT_DESCRIPTION)?;

    prompter.say("\nOUTPUT:")?;
    let output_file = prompter
        .ask(&format!("Output filename [puzzle_set_{level_id}.json]: "))?
        .map(PathBuf::from);

    Ok(ConvertRequest::new(
        input_file,
        Some(level_id),
        Some(title),
        Some(description),
        output_file,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub loaded: usize,
    pub converted: usize,
    /// 1-based positions of the puzzles that were skipped
    pub failed: Vec<usize>,
    pub output_file: PathBuf,
}

/// Convert the whole input file and write the puzzle set once at the end.
pub fn run_convert(request: &ConvertRequest) -> Result<ConvertSummary, ToolError> {
    let raw = files::read_puzzle_array(&request.input_file)?;
    let loaded = raw.len();
    info!(loaded, input = %request.input_file.display(), "Loaded puzzles");

    let report = convert_batch(raw);
    let failed = report.failures.iter().map(|f| f.index).collect();

    let set = PuzzleSet {
        level_id: request.level_id.clone(),
        title: request.title.clone(),
        description: request.description.clone(),
        puzzles: report.converted,
    };
    files::write_json_pretty(&request.output_file, &set)?;

    Ok(ConvertSummary {
        loaded,
        converted: set.puzzles.len(),
        failed,
        output_file: request.output_file.clone(),
    })
}
