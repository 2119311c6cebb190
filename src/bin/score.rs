use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use conveyor::{init_tracing, parse_puzzle, read_input, simulate, write_answer};

/// Scores the board as given, without placing any arrows.
#[derive(Parser, Debug)]
struct Cli {
    /// Puzzle file; stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_deref()).context("failed to read puzzle")?;
    let mut puzzle = parse_puzzle(&text).context("malformed puzzle")?;
    let sim = simulate(&puzzle.board, &mut puzzle.robots);
    for (index, outcome) in sim.outcomes.iter().enumerate() {
        tracing::debug!(robot = index, score = outcome.score, end = ?outcome.end, "robot finished");
    }

    write_answer(
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        sim.total,
        &"",
    )?;
    Ok(())
}
