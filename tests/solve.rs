use conveyor::{
    parse_puzzle, simulate, solve, Cell, Coords, Direction, InputError, SearchConfig,
    Termination, MAX_STATES, write_answer,
};

// Robot 0 runs right along a corridor that ends in the void; robot 1 laps
// an open row.
const TWO_CORRIDORS: &str = "\
###################
###################
#.................#
###################
###################
###################
...................
###################
###################
###################
2
1 2 R
5 6 L
";

#[test]
fn scores_unmodified_board() {
    let mut puzzle = parse_puzzle(TWO_CORRIDORS).unwrap();
    let sim = simulate(&puzzle.board, &mut puzzle.robots);
    assert_eq!(sim.outcomes[0].score, 17);
    assert_eq!(sim.outcomes[0].end, Termination::FellIntoVoid);
    assert_eq!(sim.outcomes[1].score, 19);
    assert_eq!(sim.outcomes[1].end, Termination::Looped);
    assert_eq!(sim.total, 36);
    assert!(sim.outcomes.iter().all(|o| o.score <= MAX_STATES));
}

#[test]
fn chains_placements_robot_by_robot() {
    let puzzle = parse_puzzle(TWO_CORRIDORS).unwrap();
    let solution = solve(&puzzle, &SearchConfig::default()).unwrap();
    assert_eq!(solution.baseline, 36);
    assert_eq!(solution.score, 70);
    assert_eq!(solution.to_string(), "17 2 L 6 6 R");
    assert_eq!(solution.board[Coords::new(2, 17)], Cell::Arrow(Direction::Left));
    assert_eq!(solution.board[Coords::new(6, 6)], Cell::Arrow(Direction::Right));

    let mut robots = puzzle.robots.clone();
    assert_eq!(simulate(&solution.board, &mut robots).total, 70);
}

#[test]
fn focus_limits_chaining_to_one_robot() {
    let puzzle = parse_puzzle(TWO_CORRIDORS).unwrap();
    let config = SearchConfig {
        focus: Some(1),
        ..SearchConfig::default()
    };
    let solution = solve(&puzzle, &config).unwrap();
    assert_eq!(solution.to_string(), "6 6 R");
    assert_eq!(solution.score, 17 + 37);
}

#[test]
fn input_errors_are_descriptive() {
    let err = parse_puzzle("#.#\n").unwrap_err();
    assert_eq!(err, InputError::BadLineLength { line: 0, len: 3 });
    assert_eq!(err.to_string(), "grid line 0 has 3 characters, expected 19");

    let bad = TWO_CORRIDORS.replace("5 6 L", "5 6 Q");
    assert_eq!(
        parse_puzzle(&bad).unwrap_err().to_string(),
        "robot 1: unknown direction \"Q\""
    );
}

fn answer(score: usize, line: &dyn std::fmt::Display) -> (String, String) {
    let mut out: Vec<u8> = vec![];
    let mut diag: Vec<u8> = vec![];
    write_answer(&mut out, &mut diag, score, line).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
}

#[test]
fn score_only_prints_blank_answer_line() {
    let mut puzzle = parse_puzzle(TWO_CORRIDORS).unwrap();
    let sim = simulate(&puzzle.board, &mut puzzle.robots);
    let (out, diag) = answer(sim.total, &"");
    assert_eq!(out, "\n");
    assert_eq!(diag, "36\n");
}

#[test]
fn search_prints_placements_and_score() {
    let puzzle = parse_puzzle(TWO_CORRIDORS).unwrap();
    let solution = solve(&puzzle, &SearchConfig::default()).unwrap();
    let (out, diag) = answer(solution.score, &solution);
    assert_eq!(out, "17 2 L 6 6 R\n");
    assert_eq!(diag, "70\n");
}
