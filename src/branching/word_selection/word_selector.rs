use crate::branching::SelectionContext;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// A trait containing the interface for ordering the candidate words of a selected slot.
pub trait WordSelector {
    /// Returns the words in the current domain of `slot` in the order in which they should be
    /// tried by the search.
    fn order_words(&mut self, context: &SelectionContext, slot: SlotId) -> Vec<WordId>;
}
