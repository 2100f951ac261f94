use crate::branching::SelectionContext;
use crate::puzzle::SlotId;

/// A trait containing the interface for selecting the next slot to branch on.
pub trait SlotSelector {
    /// Determines which slot to select next if there are any left to branch on. Should only
    /// return [`None`] when every slot in the provided context is assigned.
    fn select_slot(&mut self, context: &SelectionContext) -> Option<SlotId>;
}
