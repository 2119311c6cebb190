use tracing::trace;

use crate::board::{Board, Cell, Coords};
use crate::robot::Robot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    FellIntoVoid,
    Looped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotOutcome {
    pub score: usize,
    pub end: Termination,
    /// Where the robot last stood on a plain platform, if anywhere.
    pub last_platform: Option<Coords>,
}

/// Runs one robot from its current state until it falls into the void or
/// repeats a state.
pub fn simulate_robot(board: &Board, robot: &mut Robot) -> RobotOutcome {
    let mut score = 0;
    let mut last_platform = None;
    loop {
        let cell = board[robot.pos()];
        match cell {
            Cell::Void => {
                return RobotOutcome {
                    score,
                    end: Termination::FellIntoVoid,
                    last_platform,
                }
            }
            Cell::Arrow(dir) => robot.turn(dir),
            Cell::Platform => (),
        }

        if !robot.visit() {
            return RobotOutcome {
                score,
                end: Termination::Looped,
                last_platform,
            };
        }

        score += 1;
        if cell == Cell::Platform {
            last_platform = Some(robot.pos());
        }
        robot.advance();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub total: usize,
    pub outcomes: Vec<RobotOutcome>,
}

impl Simulation {
    pub fn last_platform(&self, robot: usize) -> Option<Coords> {
        self.outcomes.get(robot).and_then(|o| o.last_platform)
    }
}

/// Resets every robot to its starting snapshot and runs them in order.
pub fn simulate(board: &Board, robots: &mut [Robot]) -> Simulation {
    let outcomes: Vec<RobotOutcome> = robots
        .iter_mut()
        .map(|robot| {
            robot.reset();
            simulate_robot(board, robot)
        })
        .collect();
    let total: usize = outcomes.iter().map(|o| o.score).sum();
    trace!(total, robots = outcomes.len(), "simulated board");
    Simulation { total, outcomes }
}

#[cfg(test)]
use crate::board::{Direction, COLS, ROWS};
#[cfg(test)]
use crate::robot::MAX_STATES;

#[cfg(test)]
fn run(board: &Board, row: usize, col: usize, dir: Direction) -> RobotOutcome {
    let mut robot = Robot::new(Coords::new(row, col), dir);
    simulate_robot(board, &mut robot)
}

#[test]
fn test_open_row_loops_after_full_lap() {
    let board = Board::filled(Cell::Platform);
    let outcome = run(&board, 0, 0, Direction::Right);
    assert_eq!(outcome.score, COLS);
    assert_eq!(outcome.end, Termination::Looped);
    assert_eq!(outcome.last_platform, Some(Coords::new(0, 18)));

    let outcome = run(&board, 0, 0, Direction::Up);
    assert_eq!(outcome.score, ROWS);
    assert_eq!(outcome.last_platform, Some(Coords::new(1, 0)));
}

#[test]
fn test_void_ends_the_run() {
    let mut board = Board::filled(Cell::Void);
    assert_eq!(
        run(&board, 5, 5, Direction::Left),
        RobotOutcome {
            score: 0,
            end: Termination::FellIntoVoid,
            last_platform: None
        }
    );

    board.set(Coords::new(5, 5), Cell::Platform);
    let outcome = run(&board, 5, 5, Direction::Left);
    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.end, Termination::FellIntoVoid);
    assert_eq!(outcome.last_platform, Some(Coords::new(5, 5)));
}

#[test]
fn test_arrows_turn_the_robot() {
    let mut board = Board::filled(Cell::Void);
    // a 2x2 square of arrows loops forever
    board.set(Coords::new(0, 0), Cell::Arrow(Direction::Right));
    board.set(Coords::new(0, 1), Cell::Arrow(Direction::Down));
    board.set(Coords::new(1, 1), Cell::Arrow(Direction::Left));
    board.set(Coords::new(1, 0), Cell::Arrow(Direction::Up));
    let outcome = run(&board, 0, 0, Direction::Down);
    assert_eq!(outcome.score, 4);
    assert_eq!(outcome.end, Termination::Looped);
    assert_eq!(outcome.last_platform, None);
}

#[test]
fn test_wraps_around_the_torus() {
    let mut board = Board::filled(Cell::Void);
    board.set(Coords::new(3, 0), Cell::Platform);
    board.set(Coords::new(3, 18), Cell::Platform);
    let outcome = run(&board, 3, 0, Direction::Left);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.end, Termination::FellIntoVoid);
    assert_eq!(outcome.last_platform, Some(Coords::new(3, 18)));
}

#[test]
fn test_score_is_bounded_by_state_space() {
    let mut board = Board::filled(Cell::Platform);
    for row in 0..ROWS {
        let dir = if row % 2 == 0 { Direction::Down } else { Direction::Right };
        board.set(Coords::new(row, (row * 7) % COLS), Cell::Arrow(dir));
    }
    for dir in Direction::ALL {
        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(run(&board, row, col, dir).score <= MAX_STATES);
            }
        }
    }
}

#[test]
fn test_resimulating_is_idempotent() {
    let mut board = Board::filled(Cell::Platform);
    board.set(Coords::new(2, 4), Cell::Arrow(Direction::Down));
    board.set(Coords::new(7, 9), Cell::Void);
    let mut robots = vec![
        Robot::new(Coords::new(2, 0), Direction::Right),
        Robot::new(Coords::new(7, 0), Direction::Right),
    ];
    let first = simulate(&board, &mut robots);
    let second = simulate(&board, &mut robots);
    assert_eq!(first, second);
    assert_eq!(first.total, first.outcomes.iter().map(|o| o.score).sum::<usize>());
    assert_eq!(first.last_platform(5), None);
}
