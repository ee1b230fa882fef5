use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gridweave::entry::{self, NormalizeOptions};
use gridweave::layout::{ClueRef, Layout};
use gridweave::puzzle::{self, GenerateOptions, MAX_WORDS};

/// Crossword layout generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to a JSON file holding a list of {word, clue} objects
    entries: PathBuf,

    /// How many words to place (default: every usable entry, capped at 25)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for the random source (same seed, same layout)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the layout as JSON instead of ASCII art
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the gridweave CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic: read the entry file, normalize, generate,
/// print. Engine errors bubble up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    gridweave::logging::init_logger(cli.debug);

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&cli.entries)?)?;
    let entries = entry::normalize(&raw, &NormalizeOptions::default())?;
    let requested = cli.count.unwrap_or_else(|| entries.len().min(MAX_WORDS));

    let mut on_progress = |phase: &str| log::info!("{phase}");
    let layout = puzzle::create_puzzle(
        &entries,
        requested,
        GenerateOptions {
            seed: cli.seed,
            on_progress: Some(&mut on_progress),
        },
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print!("{}", render(&layout));
    }

    eprintln!(
        "Placed {} words on a {}x{} grid.",
        layout.placements.len(),
        layout.rows,
        layout.cols
    );
    Ok(())
}

/// Plain-text rendering: the grid with '.' blocks, then both clue lists.
fn render(layout: &Layout) -> String {
    let mut out = String::new();

    for row in &layout.grid {
        let line: String = row
            .iter()
            .map(|cell| cell.unwrap_or('.'))
            .flat_map(|c| [c, ' '])
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let push_clues = |out: &mut String, heading: &str, clues: &[ClueRef]| {
        if clues.is_empty() {
            return;
        }
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        for c in clues {
            out.push_str(&format!("  {}. {} ({})\n", c.number, c.clue_text, c.answer_length));
        }
    };
    push_clues(&mut out, "Across:", &layout.across_clues);
    push_clues(&mut out, "Down:", &layout.down_clues);

    out
}
