use std::time::Instant;

use log::debug;

use crate::api::outputs::SatisfactionResult;
use crate::basic_types::Assignment;
use crate::basic_types::Solution;
use crate::branching::branchers::IndependentSlotWordBrancher;
use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::branching::LeastConstraining;
use crate::branching::MostConstrained;
use crate::engine::conflicts::is_consistent;
use crate::engine::search::search;
use crate::engine::DomainStore;
use crate::engine::SolverStatistics;
use crate::propagators::enforce_arc_consistency;
use crate::propagators::enforce_node_consistency;
use crate::puzzle::Crossword;
use crate::puzzle::Vocabulary;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::xword_assert_moderate;

/// The main interaction point: couples a puzzle with a vocabulary and fills the grid by assigning
/// one word to every slot.
///
/// # Example
/// ```rust
/// # use xword_solver::puzzle::{Crossword, Grid, Vocabulary};
/// # use xword_solver::{SatisfactionResult, Solver};
/// // A grid with an across slot in the top row which crosses a down slot in the final column.
/// let grid = Grid::from_rows(vec![
///     vec![true, true, true],
///     vec![false, false, true],
///     vec![false, false, true],
/// ]);
/// let puzzle = Crossword::new(grid);
/// let vocabulary = Vocabulary::new(["CAT", "TOE"].map(String::from));
///
/// let mut solver = Solver::new(puzzle, vocabulary);
/// let mut brancher = solver.default_brancher();
/// match solver.satisfy(&mut brancher) {
///     SatisfactionResult::Satisfiable(solution) => {
///         assert_eq!(solution.num_slots(), 2);
///     }
///     SatisfactionResult::Unsatisfiable => panic!("This problem should have a solution"),
/// }
/// ```
#[derive(Debug)]
pub struct Solver {
    puzzle: Crossword,
    vocabulary: Vocabulary,
    /// The domains of the slots; created once per solver and only ever shrunk.
    domains: DomainStore,
    statistics: SolverStatistics,
}

impl Solver {
    /// Creates a solver for the given puzzle and vocabulary; one full-vocabulary domain is set up
    /// per slot.
    pub fn new(puzzle: Crossword, vocabulary: Vocabulary) -> Self {
        let domains = DomainStore::new(&puzzle, &vocabulary);
        Solver {
            puzzle,
            vocabulary,
            domains,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn puzzle(&self) -> &Crossword {
        &self.puzzle
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The default search strategy: minimum-remaining-values slot selection with
    /// least-constraining-value word ordering.
    pub fn default_brancher(&self) -> DefaultBrancher {
        IndependentSlotWordBrancher::new(MostConstrained, LeastConstraining)
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }

    /// Searches for an assignment of one word per slot such that all overlapping letters agree
    /// and no word is reused.
    ///
    /// First the domains are filtered by node consistency (word length) and arc consistency
    /// (overlap support), then a backtracking search is performed with the provided [`Brancher`]
    /// determining the search order. The first solution found is returned; when no solution
    /// exists the result is [`SatisfactionResult::Unsatisfiable`].
    pub fn satisfy(&mut self, brancher: &mut impl Brancher) -> SatisfactionResult {
        let start = Instant::now();
        let result = self.propagate_and_search(brancher);
        self.statistics.num_removed_words = self.domains.num_removed_words();
        self.statistics.time_spent_in_solver += start.elapsed().as_millis() as u64;
        result
    }

    fn propagate_and_search(&mut self, brancher: &mut impl Brancher) -> SatisfactionResult {
        enforce_node_consistency(&mut self.domains, &self.puzzle, &self.vocabulary);
        if let Some(slot) = self.domains.first_empty_domain() {
            debug!("Node consistency emptied the domain of slot {slot:?}");
            return SatisfactionResult::Unsatisfiable;
        }
        if enforce_arc_consistency(
            &mut self.domains,
            &self.puzzle,
            &self.vocabulary,
            &mut self.statistics,
        )
        .is_err()
        {
            return SatisfactionResult::Unsatisfiable;
        }

        let mut assignment = Assignment::new(self.puzzle.num_slots(), self.vocabulary.len());
        if search(
            &self.puzzle,
            &self.vocabulary,
            &self.domains,
            &mut assignment,
            brancher,
            &mut self.statistics,
        ) {
            xword_assert_moderate!(is_consistent(&assignment, &self.puzzle, &self.vocabulary));
            SatisfactionResult::Satisfiable(Solution::new(&assignment, &self.vocabulary))
        } else {
            SatisfactionResult::Unsatisfiable
        }
    }
}
