pub mod board;
pub mod input;
pub mod robot;
pub mod search;
pub mod simulate;

pub use board::{Board, Cell, Coords, Direction, COLS, ROWS};
pub use input::{parse_puzzle, InputError, Puzzle};
pub use robot::{Robot, MAX_STATES};
pub use search::{solve, try_cell, Placement, SearchConfig, SearchError, Solution, Trial};
pub use simulate::{simulate, simulate_robot, RobotOutcome, Simulation, Termination};

/// Reads the puzzle from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&std::path::Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => std::io::read_to_string(std::io::stdin()),
    }
}

/// Writes the result: the score as a diagnostic line on `diag`, the answer
/// line (placements, or nothing when only scoring) on `out`.
pub fn write_answer(
    out: &mut impl std::io::Write,
    diag: &mut impl std::io::Write,
    score: usize,
    answer: &dyn std::fmt::Display,
) -> std::io::Result<()> {
    writeln!(diag, "{score}")?;
    writeln!(out, "{answer}")
}

/// Installs the `RUST_LOG`-driven subscriber. Logs go to stderr; stdout is
/// reserved for the answer line.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
