use thiserror::Error;

use crate::board::{Board, Cell, Coords, Direction, COLS, ROWS};
use crate::robot::Robot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("grid ended after {found} lines, expected 10")]
    MissingGridLine { found: usize },
    #[error("grid line {line} has {len} characters, expected 19")]
    BadLineLength { line: usize, len: usize },
    #[error("unknown cell symbol {symbol:?} at line {line}, column {col}")]
    UnknownCell { line: usize, col: usize, symbol: char },
    #[error("missing robot count")]
    MissingRobotCount,
    #[error("bad robot count {0:?}")]
    BadRobotCount(String),
    #[error("expected {expected} robots, input ended after {found}")]
    MissingRobot { expected: usize, found: usize },
    #[error("robot {index}: expected `x y direction`, got {line:?}")]
    BadRobotLine { index: usize, line: String },
    #[error("robot {index}: bad coordinate {value:?}")]
    BadCoordinate { index: usize, value: String },
    #[error("robot {index}: coordinate ({x}, {y}) is outside the 19x10 grid")]
    CoordinateOutOfRange { index: usize, x: usize, y: usize },
    #[error("robot {index}: unknown direction {symbol:?}")]
    UnknownDirection { index: usize, symbol: String },
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// A parsed puzzle: the board plus the robots in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub board: Board,
    pub robots: Vec<Robot>,
}

pub fn parse_grid_line(line_no: usize, line: &str) -> Result<[Cell; COLS], InputError> {
    let len = line.chars().count();
    if len != COLS {
        return Err(InputError::BadLineLength { line: line_no, len });
    }
    let mut row = [Cell::Void; COLS];
    for (col, symbol) in line.chars().enumerate() {
        row[col] = Cell::of_char(symbol).ok_or(InputError::UnknownCell {
            line: line_no,
            col,
            symbol,
        })?;
    }
    Ok(row)
}

fn parse_coordinate(index: usize, value: &str) -> Result<usize, InputError> {
    value.parse().map_err(|_| InputError::BadCoordinate {
        index,
        value: value.to_string(),
    })
}

/// Parses `x y direction`, where `x` is the column and `y` the row.
pub fn parse_robot(index: usize, line: &str) -> Result<Robot, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [x, y, dir] = fields.as_slice() else {
        return Err(InputError::BadRobotLine {
            index,
            line: line.to_string(),
        });
    };
    let x = parse_coordinate(index, x)?;
    let y = parse_coordinate(index, y)?;
    if x >= COLS || y >= ROWS {
        return Err(InputError::CoordinateOutOfRange { index, x, y });
    }
    let mut symbols = dir.chars();
    let direction = match (symbols.next().and_then(Direction::of_char), symbols.next()) {
        (Some(d), None) => d,
        _ => {
            return Err(InputError::UnknownDirection {
                index,
                symbol: dir.to_string(),
            })
        }
    };
    Ok(Robot::new(Coords::new(y, x), direction))
}

pub fn parse_puzzle(input: &str) -> Result<Puzzle, InputError> {
    let mut lines = input.lines().map(|l| l.trim_end_matches('\r'));

    let mut cells = [[Cell::Void; COLS]; ROWS];
    for (row, slot) in cells.iter_mut().enumerate() {
        let line = lines
            .next()
            .ok_or(InputError::MissingGridLine { found: row })?;
        *slot = parse_grid_line(row, line)?;
    }

    let count_line = lines.next().ok_or(InputError::MissingRobotCount)?.trim();
    if count_line.is_empty() {
        return Err(InputError::MissingRobotCount);
    }
    let count: usize = count_line
        .parse()
        .map_err(|_| InputError::BadRobotCount(count_line.to_string()))?;

    let mut robots = Vec::new();
    for index in 0..count {
        let line = lines.next().ok_or(InputError::MissingRobot {
            expected: count,
            found: index,
        })?;
        robots.push(parse_robot(index, line)?);
    }

    if let Some(rest) = lines.find(|l| !l.trim().is_empty()) {
        return Err(InputError::TrailingInput(rest.to_string()));
    }

    Ok(Puzzle {
        board: Board::new(cells),
        robots,
    })
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = "\
###################
###################
###################
###################
###...........#####
###################
###################
###################
###################
###################
1
3 4 R
";

#[test]
fn test_parse_sample() {
    let puzzle = parse_puzzle(SAMPLE).unwrap();
    assert_eq!(puzzle.robots.len(), 1);
    assert_eq!(puzzle.robots[0].start(), Coords::new(4, 3));
    assert_eq!(puzzle.robots[0].facing(), Direction::Right);
    assert_eq!(puzzle.board[Coords::new(4, 3)], Cell::Platform);
    assert_eq!(puzzle.board[Coords::new(4, 14)], Cell::Void);
    let grid: String = SAMPLE.lines().take(ROWS).map(|l| format!("{l}\n")).collect();
    assert_eq!(puzzle.board.to_string(), grid);
}

#[test]
fn test_crlf_lines() {
    let crlf = SAMPLE.replace('\n', "\r\n");
    assert!(parse_puzzle(&crlf).is_ok());
}

#[test]
fn test_grid_errors() {
    assert_eq!(
        parse_puzzle("...\n"),
        Err(InputError::BadLineLength { line: 0, len: 3 })
    );
    let bad_symbol = SAMPLE.replacen("###...", "###.x.", 1);
    assert_eq!(
        parse_puzzle(&bad_symbol),
        Err(InputError::UnknownCell { line: 4, col: 4, symbol: 'x' })
    );
    let short: String = SAMPLE.lines().take(4).map(|l| format!("{l}\n")).collect();
    assert_eq!(
        parse_puzzle(&short),
        Err(InputError::MissingGridLine { found: 4 })
    );
}

#[test]
fn test_robot_errors() {
    let grid: String = SAMPLE.lines().take(ROWS).map(|l| format!("{l}\n")).collect();
    let with = |tail: &str| parse_puzzle(&format!("{grid}{tail}"));

    assert_eq!(with(""), Err(InputError::MissingRobotCount));
    assert_eq!(with("\n"), Err(InputError::MissingRobotCount));
    assert_eq!(with("  \n1\n"), Err(InputError::MissingRobotCount));
    assert_eq!(
        with(format!("{}\n0 0 L\n", usize::MAX).as_str()),
        Err(InputError::MissingRobot { expected: usize::MAX, found: 1 })
    );
    assert_eq!(with("two\n"), Err(InputError::BadRobotCount("two".into())));
    assert_eq!(
        with("2\n1 1 L\n"),
        Err(InputError::MissingRobot { expected: 2, found: 1 })
    );
    assert_eq!(
        with("1\n1 1\n"),
        Err(InputError::BadRobotLine { index: 0, line: "1 1".into() })
    );
    assert_eq!(
        with("1\n-1 1 L\n"),
        Err(InputError::BadCoordinate { index: 0, value: "-1".into() })
    );
    assert_eq!(
        with("1\n19 0 L\n"),
        Err(InputError::CoordinateOutOfRange { index: 0, x: 19, y: 0 })
    );
    assert_eq!(
        with("1\n0 10 L\n"),
        Err(InputError::CoordinateOutOfRange { index: 0, x: 0, y: 10 })
    );
    assert_eq!(
        with("1\n1 1 X\n"),
        Err(InputError::UnknownDirection { index: 0, symbol: "X".into() })
    );
    assert_eq!(
        with("1\n1 1 LR\n"),
        Err(InputError::UnknownDirection { index: 0, symbol: "LR".into() })
    );
    assert_eq!(
        with("0\n\njunk\n"),
        Err(InputError::TrailingInput("junk".into()))
    );
    assert_eq!(with("0\n\n\n").map(|p| p.robots.len()), Ok(0));
}
