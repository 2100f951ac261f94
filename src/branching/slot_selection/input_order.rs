use crate::branching::SelectionContext;
use crate::branching::SlotSelector;
use crate::puzzle::SlotId;

/// A [`SlotSelector`] which selects the first unassigned slot in slot-id order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrder;

impl SlotSelector for InputOrder {
    fn select_slot(&mut self, context: &SelectionContext) -> Option<SlotId> {
        context.slots().find(|&slot| !context.is_assigned(slot))
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Assignment;
    use crate::branching::InputOrder;
    use crate::branching::SelectionContext;
    use crate::branching::SlotSelector;
    use crate::engine::DomainStore;
    use crate::puzzle::Crossword;
    use crate::puzzle::Grid;
    use crate::puzzle::Vocabulary;

    #[test]
    fn slots_are_selected_in_order() {
        let puzzle = Crossword::new(Grid::from_rows(vec![
            vec![true, true, true],
            vec![false, false, false],
            vec![true, true, true],
        ]));
        let vocabulary = Vocabulary::new(["CAT", "DOG"].map(String::from));
        let domains = DomainStore::new(&puzzle, &vocabulary);
        let mut assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slots: Vec<_> = puzzle.slots().collect();

        let mut strategy = InputOrder;
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), Some(slots[0]));

        assignment.assign(slots[0], vocabulary.id_of("CAT").unwrap());
        let context = SelectionContext::new(&puzzle, &domains, &assignment);
        assert_eq!(strategy.select_slot(&context), Some(slots[1]));
    }
}
