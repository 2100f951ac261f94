use crate::basic_types::Solution;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
///
/// Unsatisfiability is an expected outcome of solving, not an error: it means no assignment of
/// words to slots satisfies all constraints.
#[derive(Debug)]
pub enum SatisfactionResult {
    /// Indicates that a solution was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that there is no solution to the satisfaction problem.
    Unsatisfiable,
}
