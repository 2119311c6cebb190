use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use conveyor::{init_tracing, parse_puzzle, read_input, solve, write_answer, SearchConfig};

/// Places arrows on the grid to keep the robots alive as long as possible.
#[derive(Parser, Debug)]
struct Cli {
    /// Puzzle file; stdin when omitted
    input: Option<PathBuf>,
    /// Only follow this robot's trajectory when choosing cells
    #[arg(long)]
    focus: Option<usize>,
    /// Stop after this many arrows
    #[arg(long)]
    max_placements: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_deref()).context("failed to read puzzle")?;
    let puzzle = parse_puzzle(&text).context("malformed puzzle")?;
    info!(robots = puzzle.robots.len(), "puzzle loaded");

    let config = SearchConfig {
        focus: cli.focus,
        max_placements: cli.max_placements,
    };
    let started = Instant::now();
    let solution = solve(&puzzle, &config)?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        baseline = solution.baseline,
        score = solution.score,
        arrows = solution.placements.len(),
        "search finished",
    );
    debug!("final board:\n{}", solution.board);

    write_answer(
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        solution.score,
        &solution,
    )?;
    Ok(())
}
