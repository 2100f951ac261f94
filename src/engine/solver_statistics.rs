use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of a single run of the [`Solver`][crate::Solver].
    SolverStatistics {
        /// The number of candidate words tried by the backtracking search
        num_decisions: u64,
        /// The number of search nodes at which every candidate word failed
        num_conflicts: u64,
        /// The number of revise calls performed during arc consistency
        num_revisions: u64,
        /// The number of words removed from the domains by propagation
        num_removed_words: u64,
        /// The amount of time (in milliseconds) which is spent in the solver
        time_spent_in_solver: u64,
});
