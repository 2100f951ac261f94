use crate::basic_types::Assignment;
use crate::engine::DomainStore;
use crate::puzzle::Crossword;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// The read-only view of the solver state on which selectors base their decisions.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    puzzle: &'a Crossword,
    domains: &'a DomainStore,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        puzzle: &'a Crossword,
        domains: &'a DomainStore,
        assignment: &'a Assignment,
    ) -> Self {
        SelectionContext {
            puzzle,
            domains,
            assignment,
        }
    }

    /// Iterates over all slot ids in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.puzzle.slots()
    }

    pub fn is_assigned(&self, slot: SlotId) -> bool {
        self.assignment.is_assigned(slot)
    }

    pub fn domain_size(&self, slot: SlotId) -> usize {
        self.domains.size(slot)
    }

    /// Iterates over the words currently in the domain of `slot`.
    pub fn domain(&self, slot: SlotId) -> impl Iterator<Item = WordId> + '_ {
        self.domains.domain(slot)
    }

    /// The number of slots crossing `slot`.
    pub fn degree(&self, slot: SlotId) -> usize {
        self.puzzle.degree(slot)
    }

    /// The number of neighbours of `slot` whose domain still contains `word`.
    pub fn num_neighbours_containing(&self, slot: SlotId, word: WordId) -> usize {
        self.puzzle
            .neighbours(slot)
            .iter()
            .filter(|overlap| self.domains.contains(overlap.neighbour, word))
            .count()
    }
}
