use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Cell, Coords, Direction};
use crate::input::Puzzle;
use crate::robot::Robot;
use crate::simulate::{simulate, Simulation};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("focus robot {focus} does not exist, the puzzle has {robots} robots")]
    FocusOutOfRange { focus: usize, robots: usize },
}

/// A single-cell edit of the board. Dropping the trial puts the old cell
/// back; `commit` keeps the edit.
pub struct Trial<'a> {
    board: &'a mut Board,
    at: Coords,
    previous: Cell,
    committed: bool,
}

impl<'a> Trial<'a> {
    pub fn open(board: &'a mut Board, at: Coords, cell: Cell) -> Self {
        let previous = board[at];
        board.set(at, cell);
        Self {
            board,
            at,
            previous,
            committed: false,
        }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.set(self.at, self.previous);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub at: Coords,
    pub dir: Direction,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.at.col, self.at.row, self.dir)
    }
}

/// Tries every arrow kind at `at`, in `Direction::ALL` order. Returns the
/// first kind whose total beats `best`, together with its simulation. The
/// board is unchanged on return.
pub fn try_cell(
    board: &mut Board,
    robots: &mut [Robot],
    at: Coords,
    best: usize,
) -> Option<(Direction, Simulation)> {
    let mut winner: Option<(Direction, Simulation)> = None;
    for dir in Direction::ALL {
        let trial = Trial::open(board, at, Cell::Arrow(dir));
        let sim = simulate(trial.board(), robots);
        let to_beat = winner.as_ref().map_or(best, |(_, s)| s.total);
        debug!(row = at.row, col = at.col, %dir, total = sim.total, to_beat, "trial");
        if sim.total > to_beat {
            winner = Some((dir, sim));
        }
    }
    winner
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Only chain from this robot's trajectory. All robots, in input order,
    /// when unset.
    pub focus: Option<usize>,
    pub max_placements: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub placements: Vec<Placement>,
    pub baseline: usize,
    pub score: usize,
    pub board: Board,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.placements.iter().join(" "))
    }
}

/// Greedy hill climbing over single arrow placements.
///
/// For each selected robot, the cell where it last stood on a plain
/// platform is the next candidate. An arrow is committed there only if it
/// strictly raises the total score, after which the robot's new last
/// platform becomes the candidate. A robot's chain ends when it has no
/// platform cell left to edit or when no arrow helps.
pub fn solve(puzzle: &Puzzle, config: &SearchConfig) -> Result<Solution, SearchError> {
    let mut board = puzzle.board.clone();
    let mut robots = puzzle.robots.clone();

    let order = match config.focus {
        Some(focus) if focus >= robots.len() => {
            return Err(SearchError::FocusOutOfRange {
                focus,
                robots: robots.len(),
            })
        }
        Some(focus) => focus..focus + 1,
        None => 0..robots.len(),
    };

    let mut best = simulate(&board, &mut robots);
    let baseline = best.total;
    debug!(baseline, "initial board scored");

    let mut placements = vec![];
    'robots: for index in order {
        let mut candidate = best.last_platform(index);
        while let Some(at) = candidate {
            if config.max_placements.is_some_and(|max| placements.len() >= max) {
                break 'robots;
            }
            let Some((dir, sim)) = try_cell(&mut board, &mut robots, at, best.total) else {
                debug!(robot = index, row = at.row, col = at.col, "no improving arrow");
                break;
            };
            Trial::open(&mut board, at, Cell::Arrow(dir)).commit();
            info!(robot = index, row = at.row, col = at.col, %dir, score = sim.total, "placed arrow");
            placements.push(Placement { at, dir });
            best = sim;
            candidate = best.last_platform(index);
        }
    }

    Ok(Solution {
        placements,
        baseline,
        score: best.total,
        board,
    })
}

#[cfg(test)]
use crate::input::{parse_puzzle, SAMPLE};

#[test]
fn test_trial_reverts_unless_committed() {
    let mut board = Board::filled(Cell::Platform);
    let at = Coords::new(1, 1);
    {
        let trial = Trial::open(&mut board, at, Cell::Arrow(Direction::Up));
        assert_eq!(trial.board()[at], Cell::Arrow(Direction::Up));
    }
    assert_eq!(board[at], Cell::Platform);

    Trial::open(&mut board, at, Cell::Arrow(Direction::Down)).commit();
    assert_eq!(board[at], Cell::Arrow(Direction::Down));
}

#[test]
fn test_ties_keep_the_first_kind() {
    let mut board = Board::filled(Cell::Void);
    for at in [Coords::new(4, 5), Coords::new(3, 5), Coords::new(5, 5)] {
        board.set(at, Cell::Platform);
    }
    let before = board.clone();
    let mut robots = vec![Robot::new(Coords::new(4, 5), Direction::Right)];
    assert_eq!(simulate(&board, &mut robots).total, 1);

    let (dir, sim) = try_cell(&mut board, &mut robots, Coords::new(4, 5), 1).unwrap();
    // up and down both reach one more platform
    assert_eq!(dir, Direction::Up);
    assert_eq!(sim.total, 2);
    assert_eq!(board, before);

    assert!(try_cell(&mut board, &mut robots, Coords::new(4, 5), 2).is_none());
}

#[test]
fn test_turns_robot_back_before_the_void() {
    let puzzle = parse_puzzle(SAMPLE).unwrap();
    let solution = solve(&puzzle, &SearchConfig::default()).unwrap();
    assert_eq!(solution.baseline, 11);
    assert_eq!(solution.score, 21);
    assert_eq!(
        solution.placements,
        vec![Placement {
            at: Coords::new(4, 13),
            dir: Direction::Left
        }]
    );
    assert_eq!(solution.to_string(), "13 4 L");
    assert_eq!(solution.board[Coords::new(4, 13)], Cell::Arrow(Direction::Left));
}

#[test]
fn test_respects_config() {
    let puzzle = parse_puzzle(SAMPLE).unwrap();
    let config = SearchConfig {
        max_placements: Some(0),
        ..SearchConfig::default()
    };
    let solution = solve(&puzzle, &config).unwrap();
    assert!(solution.placements.is_empty());
    assert_eq!(solution.score, solution.baseline);
    assert_eq!(solution.board, puzzle.board);
    assert_eq!(solution.to_string(), "");

    let config = SearchConfig {
        focus: Some(1),
        ..SearchConfig::default()
    };
    assert_eq!(
        solve(&puzzle, &config).unwrap_err(),
        SearchError::FocusOutOfRange { focus: 1, robots: 1 }
    );
}

#[test]
fn test_never_scores_below_baseline() {
    let mut board = Board::filled(Cell::Platform);
    board.set(Coords::new(0, 3), Cell::Void);
    board.set(Coords::new(6, 10), Cell::Arrow(Direction::Up));
    board.set(Coords::new(9, 2), Cell::Void);
    let puzzle = Puzzle {
        board,
        robots: vec![
            Robot::new(Coords::new(0, 0), Direction::Right),
            Robot::new(Coords::new(6, 0), Direction::Right),
            Robot::new(Coords::new(9, 9), Direction::Left),
        ],
    };
    let solution = solve(&puzzle, &SearchConfig::default()).unwrap();
    assert!(solution.score >= solution.baseline);

    let mut robots = puzzle.robots.clone();
    assert_eq!(simulate(&solution.board, &mut robots).total, solution.score);
    assert_eq!(solution.board.arrows().count(), solution.placements.len() + 1);
}
