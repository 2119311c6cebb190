use rustc_hash::FxHashSet;

use crate::board::{Coords, Direction, COLS};

/// Upper bound on distinct `(position, direction)` states, and therefore on
/// the score a single robot can reach.
pub const MAX_STATES: usize = 4 * 190;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    start: Coords,
    facing: Direction,

    pos: Coords,
    dir: Direction,
    /// state ids seen since the last reset
    visited: FxHashSet<usize>,
}

impl Robot {
    pub fn new(start: Coords, facing: Direction) -> Self {
        Self {
            start,
            facing,
            pos: start,
            dir: facing,
            visited: FxHashSet::default(),
        }
    }

    pub fn start(&self) -> Coords {
        self.start
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Back to the position and direction read from the input, forgetting
    /// every visited state.
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.dir = self.facing;
        self.visited.clear();
    }

    pub fn turn(&mut self, dir: Direction) {
        self.dir = dir;
    }

    /// Unique per (position, direction): there are 190 cells, so the
    /// direction is spread out by 200.
    pub fn state_id(&self) -> usize {
        self.dir.index() * 200 + self.pos.row * COLS + self.pos.col
    }

    /// Records the current state. Returns `false` if it was seen before.
    pub fn visit(&mut self) -> bool {
        self.visited.insert(self.state_id())
    }

    pub fn advance(&mut self) {
        self.pos = self.pos.step(self.dir);
    }
}

#[test]
fn test_state_ids_are_unique() {
    let mut seen = FxHashSet::default();
    for dir in Direction::ALL {
        for row in 0..crate::board::ROWS {
            for col in 0..COLS {
                let robot = Robot::new(Coords::new(row, col), dir);
                assert!(seen.insert(robot.state_id()));
            }
        }
    }
    assert_eq!(seen.len(), MAX_STATES);
}

#[test]
fn test_reset_restores_snapshot() {
    let mut robot = Robot::new(Coords::new(2, 3), Direction::Up);
    assert!(robot.visit());
    assert!(!robot.visit());
    robot.turn(Direction::Left);
    robot.advance();
    assert_eq!(robot.pos(), Coords::new(2, 2));
    robot.reset();
    assert_eq!(robot.pos(), Coords::new(2, 3));
    assert_eq!(robot.dir(), Direction::Up);
    assert!(robot.visit());
}
