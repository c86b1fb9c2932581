//! Build review candidates for the built-in levels.
//!
//! Filters the Lichess puzzle database once per level and writes
//! `<output_dir>/<level_id>_candidates.json` for each level that has matches.
//!
//! Usage:
//!   cargo run -p puzzle-tools --bin import-puzzles -- [--db FILE] [--output-dir DIR] [--level ID]... [--loose-tags]
//!
//! Set PUZZLE_DB_PATH / PUZZLE_OUTPUT_DIR env vars or use a .env file.

use std::path::PathBuf;

use clap::Parser;
use puzzle_core::dataset::load_dataset;
use puzzle_core::levels::{find_level, LevelPreset, LEVELS};
use puzzle_core::TagMatching;
use puzzle_tools::import::{import_candidates, is_missing_dataset};
use puzzle_tools::{logging, ToolConfig};

#[derive(Parser)]
#[command(name = "import-puzzles", about = "Build review candidates for the built-in levels")]
struct Cli {
    /// Lichess puzzle CSV
    #[arg(long)]
    db: Option<PathBuf>,

    /// Directory for the candidates files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only import these levels (repeatable). Default: all.
    #[arg(long = "level", value_name = "ID")]
    levels: Vec<String>,

    /// Match level themes as substrings of the theme list, so `mate` also
    /// finds `mateIn3` and `smotheredMate`
    #[arg(long)]
    loose_tags: bool,

    /// Print the built-in levels and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();

    if cli.list {
        for level in LEVELS {
            println!(
                "{}  {:<36} {}-{}  {}",
                level.id,
                level.title,
                level.rating_range.0,
                level.rating_range.1,
                level.themes.join(" ")
            );
        }
        return Ok(());
    }

    let levels: Vec<&LevelPreset> = if cli.levels.is_empty() {
        LEVELS.iter().collect()
    } else {
        cli.levels
            .iter()
            .map(|id| find_level(id).ok_or_else(|| anyhow::anyhow!("Unknown level: {id}")))
            .collect::<Result<_, _>>()?
    };

    let config = ToolConfig::from_env().with_overrides(cli.db, cli.output_dir);

    println!("Loading Lichess puzzle database...");
    let dataset = match load_dataset(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) if is_missing_dataset(&e) => {
            eprintln!("ERROR: {e}");
            eprintln!("Please download the Lichess puzzle database first.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    println!("Loaded {} puzzles", dataset.records.len());
    if dataset.stats.skipped > 0 {
        println!("  ({} unreadable rows skipped)", dataset.stats.skipped);
    }

    let mut saved = 0usize;
    let mut empty = Vec::new();

    for level in &levels {
        println!("\nProcessing {}: {}...", level.id, level.title);
        println!("  {}", level.notes);

        let path = config.output_dir.join(level.candidates_file_name());
        let policy = if cli.loose_tags {
            level.policy().with_matching(TagMatching::Substring)
        } else {
            level.policy()
        };
        let outcome = import_candidates(&dataset.records, &policy, &path)?;

        println!("  Found {} candidates", outcome.found);
        match outcome.written {
            Some(path) => {
                println!("  Saved to {}", path.display());
                saved += 1;
            }
            None => {
                println!("  WARNING: No puzzles found for {}!", level.id);
                empty.push(level.id);
            }
        }
    }

    println!("\nDone!");
    println!("  Levels written: {saved}/{}", levels.len());
    if !empty.is_empty() {
        println!("  Levels without candidates: {}", empty.join(", "));
    }
    println!("Review puzzles in the '{}' directory", config.output_dir.display());

    Ok(())
}
