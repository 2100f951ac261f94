//! # xword-solver
//! A solver which fills crossword grids: given a grid of fillable cells and a vocabulary, it
//! assigns one word to every slot such that word lengths match, the letters of crossing slots
//! agree, and no word is used twice.
//!
//! The filling problem is treated as a constraint satisfaction problem. The solver first shrinks
//! the per-slot candidate sets with node consistency (word length) and the AC-3 arc-consistency
//! algorithm (overlap support), and then runs a depth-first backtracking search guided by the
//! minimum-remaining-values and least-constraining-value heuristics. The search order is fully
//! deterministic: identical inputs produce identical solutions.
//!
//! # Using the solver
//! A puzzle is described by a [`Grid`][crate::puzzle::Grid] of fillable cells; constructing a
//! [`Crossword`][crate::puzzle::Crossword] derives the slots and their overlaps from it. Solving
//! is done through [`Solver::satisfy`]:
//! ```rust
//! use xword_solver::puzzle::{Crossword, Grid, Vocabulary};
//! use xword_solver::{LetterGrid, SatisfactionResult, Solver};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![true, true, true],
//!     vec![false, false, true],
//!     vec![false, false, true],
//! ]);
//! let puzzle = Crossword::new(grid);
//! let vocabulary = Vocabulary::new(["CAT", "TOE"].map(String::from));
//!
//! let mut solver = Solver::new(puzzle, vocabulary);
//! let mut brancher = solver.default_brancher();
//!
//! match solver.satisfy(&mut brancher) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         // Render the solution as a grid of letters.
//!         let rendered = LetterGrid::new(solver.puzzle(), &solution);
//!         assert_eq!(rendered.to_string(), "CAT\n██O\n██E\n");
//!     }
//!     SatisfactionResult::Unsatisfiable => panic!("This problem should have a solution"),
//! }
//! ```
//!
//! An unsatisfiable instance is reported through [`SatisfactionResult::Unsatisfiable`]; this is a
//! normal outcome, not an error.
pub mod asserts;
mod api;
mod basic_types;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod propagators;
pub mod puzzle;
pub mod statistics;

pub use api::outputs::SatisfactionResult;
pub use api::solver::Solver;
pub use basic_types::Assignment;
pub use basic_types::EmptyDomain;
pub use basic_types::LetterGrid;
pub use basic_types::PropagationStatus;
pub use basic_types::Solution;
