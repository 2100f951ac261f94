use crate::basic_types::Assignment;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::conflicts::is_consistent_with;
use crate::engine::DomainStore;
use crate::engine::SolverStatistics;
use crate::puzzle::Crossword;
use crate::puzzle::Vocabulary;
use crate::xword_assert_moderate;

/// Depth-first backtracking over partial assignments.
///
/// Extends `assignment` one slot at a time: the brancher picks the next slot and the order in
/// which to try its candidate words, and a candidate is only committed when it keeps the
/// assignment consistent. Returns `true` as soon as the assignment is complete (the first
/// solution found wins); on `false` the assignment is restored to the state it was in when the
/// call was entered, so sibling branches never observe tentative bindings.
pub(crate) fn search(
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
    domains: &DomainStore,
    assignment: &mut Assignment,
    brancher: &mut impl Brancher,
    statistics: &mut SolverStatistics,
) -> bool {
    if assignment.is_complete() {
        return true;
    }

    let Some(slot) = brancher.next_slot(&SelectionContext::new(puzzle, domains, assignment))
    else {
        return false;
    };
    xword_assert_moderate!(!assignment.is_assigned(slot));

    let candidates =
        brancher.order_words(&SelectionContext::new(puzzle, domains, assignment), slot);
    for word in candidates {
        statistics.num_decisions += 1;
        if !is_consistent_with(assignment, puzzle, vocabulary, slot, word) {
            continue;
        }
        assignment.assign(slot, word);
        if search(puzzle, vocabulary, domains, assignment, brancher, statistics) {
            return true;
        }
        assignment.unassign(slot);
    }

    statistics.num_conflicts += 1;
    false
}
