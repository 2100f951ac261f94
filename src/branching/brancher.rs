use crate::branching::SelectionContext;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// The decision procedure of the backtracking search.
///
/// At every search node the search first asks for the slot to branch on, and then for the order
/// in which the candidate words of that slot should be tried.
pub trait Brancher {
    /// Determines which slot to branch on next. Should only return [`None`] when every slot is
    /// assigned in the provided context.
    fn next_slot(&mut self, context: &SelectionContext) -> Option<SlotId>;

    /// The words in the current domain of `slot`, in the order in which the search should try
    /// them.
    fn order_words(&mut self, context: &SelectionContext, slot: SlotId) -> Vec<WordId>;
}
