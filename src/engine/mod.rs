//! The solving engine: the domain store, the consistency predicate, the backtracking search, and
//! the statistics of a solver run.
pub mod conflicts;
mod domains;
pub(crate) mod search;
mod solver_statistics;

pub use domains::DomainStore;
pub use solver_statistics::SolverStatistics;
