#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use xword_solver::puzzle::Crossword;
use xword_solver::puzzle::Grid;
use xword_solver::puzzle::Vocabulary;
use xword_solver::LetterGrid;
use xword_solver::SatisfactionResult;
use xword_solver::Solution;
use xword_solver::Solver;

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.chars().map(|cell| cell == '_').collect())
            .collect(),
    )
}

fn vocabulary(words: &[&str]) -> Vocabulary {
    Vocabulary::new(words.iter().map(|word| word.to_string()))
}

fn solve(rows: &[&str], words: &[&str]) -> (Solver, SatisfactionResult) {
    let puzzle = Crossword::new(grid(rows));
    let mut solver = Solver::new(puzzle, vocabulary(words));
    let mut brancher = solver.default_brancher();
    let result = solver.satisfy(&mut brancher);
    (solver, result)
}

/// Checks the problem constraints directly on the returned solution: lengths match, crossing
/// letters agree, and no word is used twice.
fn assert_is_valid_solution(solver: &Solver, solution: &Solution) {
    let puzzle = solver.puzzle();
    assert_eq!(solution.num_slots(), puzzle.num_slots());
    for (slot, word) in solution.iter() {
        assert_eq!(word.len(), puzzle.slot(slot).length);
        assert!(solver.vocabulary().id_of(word).is_some());
        for overlap in puzzle.neighbours(slot) {
            let neighbour_word = solution.word(overlap.neighbour);
            assert_eq!(
                word.as_bytes()[overlap.own_index],
                neighbour_word.as_bytes()[overlap.neighbour_index]
            );
        }
    }
    for (slot_a, word_a) in solution.iter() {
        for (slot_b, word_b) in solution.iter() {
            if slot_a != slot_b {
                assert_ne!(word_a, word_b);
            }
        }
    }
}

#[test]
fn two_crossing_slots_with_a_single_word_are_unsatisfiable() {
    // Both slots would need the same word, and words may not repeat.
    let (_, result) = solve(&["___", "_##", "_##"], &["AAA"]);
    assert!(matches!(result, SatisfactionResult::Unsatisfiable));
}

#[test]
fn two_crossing_slots_are_filled_with_distinct_agreeing_words() {
    let (solver, result) = solve(&["___", "_##", "_##"], &["CAT", "CAR"]);
    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("This problem should have a solution");
    };
    assert_is_valid_solution(&solver, &solution);

    // Both slots start at the shared top-left cell, so both words start with C.
    let words: Vec<&str> = solution.iter().map(|(_, word)| word).collect();
    assert_ne!(words[0], words[1]);
    assert!(words.iter().all(|word| word.starts_with('C')));
}

#[test]
fn parallel_slots_are_filled_with_distinct_words() {
    let (solver, result) = solve(&["___", "###", "___"], &["DOG", "CAT"]);
    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("This problem should have a solution");
    };
    assert_is_valid_solution(&solver, &solution);
}

#[test]
fn a_slot_without_a_word_of_matching_length_is_unsatisfiable() {
    let (_, result) = solve(&["____"], &["CAT", "HOUSE"]);
    assert!(matches!(result, SatisfactionResult::Unsatisfiable));
}

#[test]
fn a_ring_of_slots_is_filled_and_rendered() {
    let (solver, result) = solve(
        &["____", "_##_", "____"],
        &["SALT", "DOGS", "SAD", "TVS"],
    );
    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("This problem should have a solution");
    };
    assert_is_valid_solution(&solver, &solution);

    let rendered = LetterGrid::new(solver.puzzle(), &solution);
    assert_eq!(rendered.to_string(), "SALT\nA██V\nDOGS\n");
}

#[test]
fn identical_inputs_produce_identical_solutions() {
    let rows = ["_____", "_###_", "_###_", "_###_", "_____"];
    let words = [
        "SPANS", "SPAIN", "NAILS", "SNAPS", "SALSA", "SANDS", "PAINS", "PLANS",
    ];
    let (_, first) = solve(&rows, &words);
    let (_, second) = solve(&rows, &words);

    let SatisfactionResult::Satisfiable(first) = first else {
        panic!("This problem should have a solution");
    };
    let SatisfactionResult::Satisfiable(second) = second else {
        panic!("This problem should have a solution");
    };
    assert_eq!(first, second);
}

#[test]
fn a_grid_without_slots_is_trivially_satisfiable() {
    let (_, result) = solve(&["_#_", "###", "_#_"], &["CAT"]);
    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("A puzzle without slots is satisfied by the empty solution");
    };
    assert_eq!(solution.num_slots(), 0);
}
