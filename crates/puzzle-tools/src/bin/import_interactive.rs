//! Import puzzles from the Lichess database with custom criteria.
//!
//! With no flags, asks for every setting. Any flag switches to
//! non-interactive mode, using defaults for whatever is left out.
//!
//! Usage:
//!   cargo run -p puzzle-tools --bin import-interactive
//!   cargo run -p puzzle-tools --bin import-interactive -- --name forks --themes fork pin --min-rating 800 --max-rating 1000
//!
//! Writes `<output_dir>/<name>_candidates.json`.

use std::path::PathBuf;

use clap::Parser;
use puzzle_core::dataset::load_dataset;
use puzzle_core::TagMatching;
use puzzle_tools::import::{
    import_candidates, is_missing_dataset, prompt_custom_import, timestamped_name, ImportCriteria,
};
use puzzle_tools::prompt::Prompter;
use puzzle_tools::{logging, ToolConfig};

#[derive(Parser)]
#[command(name = "import-interactive", about = "Import Lichess puzzles with custom criteria")]
struct Cli {
    #[command(flatten)]
    criteria: ImportCriteria,

    /// Match themes as substrings of the theme list (`mate` also finds `mateIn2`)
    #[arg(long)]
    loose_tags: bool,

    /// Lichess puzzle CSV
    #[arg(long)]
    db: Option<PathBuf>,

    /// Directory for the candidates file
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();
    let config = ToolConfig::from_env().with_overrides(cli.db, cli.output_dir);

    // Check before asking anything
    if !config.dataset_exists() {
        eprintln!("\nERROR: {} not found!", config.dataset_path.display());
        eprintln!("Please download the Lichess puzzle database first.");
        std::process::exit(1);
    }

    let default_name = timestamped_name(chrono::Local::now().naive_local());
    let mut custom = if cli.criteria.is_given() {
        cli.criteria.into_custom_import(default_name)
    } else {
        let mut prompter = Prompter::stdio();
        prompter.say(&format!("\n{}", "=".repeat(60)))?;
        prompter.say("INTERACTIVE PUZZLE IMPORTER")?;
        prompter.say(&"=".repeat(60))?;
        prompt_custom_import(&mut prompter, &default_name)?
    };
    if cli.loose_tags {
        custom.policy = custom.policy.with_matching(TagMatching::Substring);
    }

    println!("\nLoading Lichess puzzle database...");
    let dataset = match load_dataset(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) if is_missing_dataset(&e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    println!("Loaded {} puzzles", dataset.records.len());

    let policy = &custom.policy;
    let path = config.candidates_path(&custom.output_name);
    let outcome = import_candidates(&dataset.records, policy, &path)?;

    println!("\nRESULTS:");
    println!("  Found: {} puzzles", outcome.found);
    println!("  Themes: {}", policy.themes.join(", "));
    println!("  Rating: {}-{}", policy.min_rating, policy.max_rating);

    let Some(path) = outcome.written else {
        println!("\nNo puzzles found! Try:");
        println!("  - Broadening theme list");
        println!("  - Widening rating range");
        println!("  - Using ANY match mode instead of ALL");
        return Ok(());
    };

    println!("\nSaved to: {}", path.display());
    println!("\nNEXT STEPS:");
    println!("  1. Load the candidates file in the review UI");
    println!("  2. Review, edit, and select your best puzzles");
    println!("  3. Export selected puzzles");
    println!("  4. Run convert-puzzles to create the final puzzle set");

    Ok(())
}
