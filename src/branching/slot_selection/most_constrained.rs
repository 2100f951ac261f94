use crate::branching::SelectionContext;
use crate::branching::SlotSelector;
use crate::puzzle::SlotId;

/// A [`SlotSelector`] which selects the unassigned slot with the smallest current domain
/// (minimum-remaining-values), breaking ties by the number of crossing slots (degree) and
/// finally by slot id so that the search order is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostConstrained;

impl SlotSelector for MostConstrained {
    fn select_slot(&mut self, context: &SelectionContext) -> Option<SlotId> {
        context
            .slots()
            .filter(|&slot| !context.is_assigned(slot))
            .min_by(|x, y| {
                match context.domain_size(*x).cmp(&context.domain_size(*y)) {
                    std::cmp::Ordering::Equal => {
                        // Note that we are reversing x and y here since we want to find the slot
                        // with the largest degree but we are performing a `min_by`
                        context.degree(*y).cmp(&context.degree(*x)).then(x.cmp(y))
                    }
                    ordering => ordering,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Assignment;
    use crate::branching::MostConstrained;
    use crate::branching::SelectionContext;
    use crate::branching::SlotSelector;
    use crate::engine::DomainStore;
    use crate::puzzle::Crossword;
    use crate::puzzle::Grid;
    use crate::puzzle::Vocabulary;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|cell| cell == '_').collect())
                .collect(),
        )
    }

    #[test]
    fn the_slot_with_the_smallest_domain_is_selected() {
        let puzzle = Crossword::new(grid(&["___", "_##", "_##"]));
        let vocabulary = Vocabulary::new(["CAT", "CAR", "COW"].map(String::from));
        let mut domains = DomainStore::new(&puzzle, &vocabulary);
        let assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slots: Vec<_> = puzzle.slots().collect();

        domains.remove(slots[1], vocabulary.id_of("COW").unwrap());

        let mut strategy = MostConstrained;
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), Some(slots[1]));
    }

    #[test]
    fn domain_ties_are_broken_by_degree() {
        // The across slot in the middle row crosses both down slots.
        let puzzle = Crossword::new(grid(&["_#_", "___", "_#_"]));
        let vocabulary = Vocabulary::new(["CAT", "CAR"].map(String::from));
        let domains = DomainStore::new(&puzzle, &vocabulary);
        let assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());

        let mut strategy = MostConstrained;
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        let selected = strategy.select_slot(&context).unwrap();
        assert_eq!(context.degree(selected), 2);
    }

    #[test]
    fn remaining_ties_are_broken_by_slot_id() {
        let puzzle = Crossword::new(grid(&["___", "###", "___"]));
        let vocabulary = Vocabulary::new(["CAT", "CAR"].map(String::from));
        let domains = DomainStore::new(&puzzle, &vocabulary);
        let assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slots: Vec<_> = puzzle.slots().collect();

        let mut strategy = MostConstrained;
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), Some(slots[0]));
    }

    #[test]
    fn assigned_slots_are_not_selected() {
        let puzzle = Crossword::new(grid(&["___", "###", "___"]));
        let vocabulary = Vocabulary::new(["CAT", "CAR"].map(String::from));
        let domains = DomainStore::new(&puzzle, &vocabulary);
        let mut assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slots: Vec<_> = puzzle.slots().collect();

        assignment.assign(slots[0], vocabulary.id_of("CAT").unwrap());
        let mut strategy = MostConstrained;
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), Some(slots[1]));

        assignment.assign(slots[1], vocabulary.id_of("CAR").unwrap());
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), None);
    }
}
