use itertools::Itertools;

use crate::branching::SelectionContext;
use crate::branching::WordSelector;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// A [`WordSelector`] which tries the words of the domain in word-id (lexicographic) order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lexicographic;

impl WordSelector for Lexicographic {
    fn order_words(&mut self, context: &SelectionContext, slot: SlotId) -> Vec<WordId> {
        context.domain(slot).sorted().collect()
    }
}
