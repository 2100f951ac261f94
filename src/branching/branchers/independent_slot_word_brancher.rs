use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::branching::SlotSelector;
use crate::branching::WordSelector;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// A [`Brancher`] which uses a single [`SlotSelector`] and a single [`WordSelector`]
/// independently of one another.
#[derive(Debug, Clone, Copy)]
pub struct IndependentSlotWordBrancher<SlotSelect, WordSelect> {
    /// Determines which unassigned slot to branch on next.
    slot_selector: SlotSelect,
    /// Determines the order in which the candidate words of the selected slot are tried.
    word_selector: WordSelect,
}

impl<SlotSelect, WordSelect> IndependentSlotWordBrancher<SlotSelect, WordSelect>
where
    SlotSelect: SlotSelector,
    WordSelect: WordSelector,
{
    pub fn new(slot_selector: SlotSelect, word_selector: WordSelect) -> Self {
        IndependentSlotWordBrancher {
            slot_selector,
            word_selector,
        }
    }
}

impl<SlotSelect, WordSelect> Brancher for IndependentSlotWordBrancher<SlotSelect, WordSelect>
where
    SlotSelect: SlotSelector,
    WordSelect: WordSelector,
{
    fn next_slot(&mut self, context: &SelectionContext) -> Option<SlotId> {
        self.slot_selector.select_slot(context)
    }

    fn order_words(&mut self, context: &SelectionContext, slot: SlotId) -> Vec<WordId> {
        self.word_selector.order_words(context, slot)
    }
}
