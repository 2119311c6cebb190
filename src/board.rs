pub const ROWS: usize = 10;
pub const COLS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed order in which arrow kinds are tried by the search.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn of_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Platform,
    Arrow(Direction),
    Void,
}

impl Cell {
    pub fn of_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Platform),
            '#' => Some(Cell::Void),
            _ => Direction::of_char(c).map(Cell::Arrow),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Platform => '.',
            Cell::Void => '#',
            Cell::Arrow(dir) => dir.to_char(),
        }
    }
}

/// (0,0) is upper left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coords {
    pub row: usize,
    pub col: usize,
}

impl Coords {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell in `dir`. The board is a torus, so leaving one
    /// edge enters at the opposite one.
    pub fn step(self, dir: Direction) -> Coords {
        match dir {
            Direction::Left => Coords {
                col: if self.col == 0 { COLS - 1 } else { self.col - 1 },
                ..self
            },
            Direction::Right => Coords {
                col: if self.col + 1 == COLS { 0 } else { self.col + 1 },
                ..self
            },
            Direction::Up => Coords {
                row: if self.row == 0 { ROWS - 1 } else { self.row - 1 },
                ..self
            },
            Direction::Down => Coords {
                row: if self.row + 1 == ROWS { 0 } else { self.row + 1 },
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new(cells: [[Cell; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    pub fn filled(cell: Cell) -> Self {
        Self::new([[cell; COLS]; ROWS])
    }

    pub fn set(&mut self, at: Coords, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    pub fn arrows(&self) -> impl Iterator<Item = (Coords, Direction)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, cell)| match cell {
                Cell::Arrow(dir) => Some((Coords::new(row, col), *dir)),
                _ => None,
            })
        })
    }
}

impl std::ops::Index<Coords> for Board {
    type Output = Cell;

    fn index(&self, index: Coords) -> &Cell {
        &self.cells[index.row][index.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.cells {
            for cell in line {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_wraparound() {
    assert_eq!(Coords::new(3, 0).step(Direction::Left), Coords::new(3, 18));
    assert_eq!(Coords::new(3, 18).step(Direction::Right), Coords::new(3, 0));
    assert_eq!(Coords::new(0, 7).step(Direction::Up), Coords::new(9, 7));
    assert_eq!(Coords::new(9, 7).step(Direction::Down), Coords::new(0, 7));
    assert_eq!(Coords::new(4, 4).step(Direction::Down), Coords::new(5, 4));
}

#[test]
fn test_cell_symbols() {
    for c in "#.LRUD".chars() {
        assert_eq!(Cell::of_char(c).map(Cell::to_char), Some(c));
    }
    assert_eq!(Cell::of_char('x'), None);
    assert_eq!(Direction::of_char('.'), None);
}

#[test]
fn test_display_and_arrows() {
    let mut board = Board::filled(Cell::Void);
    board.set(Coords::new(1, 2), Cell::Arrow(Direction::Up));
    board.set(Coords::new(0, 0), Cell::Platform);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), ROWS);
    assert_eq!(lines[0], ".##################");
    assert_eq!(lines[1], "##U################");
    assert_eq!(
        board.arrows().collect::<Vec<_>>(),
        vec![(Coords::new(1, 2), Direction::Up)]
    );
}
