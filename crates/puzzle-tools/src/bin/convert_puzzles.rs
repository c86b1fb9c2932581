//! Convert reviewed candidates into a puzzle set for the app.
//!
//! Usage:
//!   cargo run -p puzzle-tools --bin convert-puzzles -- <input.json> [level_id] [title] [description] [output.json]
//!
//! With no arguments, asks for each value. Puzzles that fail to convert are
//! logged and left out; the rest are written.

use std::path::PathBuf;

use clap::Parser;
use puzzle_tools::convert::{prompt_convert_request, run_convert, ConvertRequest};
use puzzle_tools::prompt::Prompter;
use puzzle_tools::{logging, ToolError};

#[derive(Parser)]
#[command(
    name = "convert-puzzles",
    about = "Convert reviewed puzzles to the app's puzzle set format"
)]
struct Cli {
    /// Puzzles JSON exported from the review UI
    input_file: Option<PathBuf>,

    /// Level id, e.g. 0001
    level_id: Option<String>,

    title: Option<String>,

    description: Option<String>,

    /// Defaults to puzzle_set_<level_id>.json
    output_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();

    let request = match cli.input_file {
        Some(input_file) => {
            if !input_file.exists() {
                eprintln!("File not found: {}", input_file.display());
                std::process::exit(1);
            }
            ConvertRequest::new(
                input_file,
                cli.level_id,
                cli.title,
                cli.description,
                cli.output_file,
            )
        }
        None => {
            let mut prompter = Prompter::stdio();
            prompter.say(&format!("\n{}", "=".repeat(60)))?;
            prompter.say("PUZZLE CONVERTER")?;
            prompter.say(&"=".repeat(60))?;
            match prompt_convert_request(&mut prompter) {
                Ok(request) => request,
                Err(e @ (ToolError::NoInputFile | ToolError::FileNotFound(_))) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    println!("\nLoading puzzles from {}...", request.input_file.display());
    let summary = run_convert(&request)?;

    println!("\nSUCCESS!");
    println!("  Loaded:    {} puzzles", summary.loaded);
    println!("  Converted: {} puzzles", summary.converted);
    if !summary.failed.is_empty() {
        let positions: Vec<String> = summary.failed.iter().map(|i| i.to_string()).collect();
        println!("  Skipped:   {} ({})", summary.failed.len(), positions.join(", "));
    }
    println!("  Saved to:  {}", summary.output_file.display());

    println!("\nNEXT STEPS:");
    println!("   1. Review the output file: {}", summary.output_file.display());
    println!(
        "   2. Move to: assets/data/puzzles/puzzle_set_{}.json",
        request.level_id
    );
    println!("   3. Test in the app!");
    println!("\n{}", "=".repeat(60));

    Ok(())
}
