use itertools::Itertools;

use crate::branching::SelectionContext;
use crate::branching::WordSelector;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;

/// A [`WordSelector`] implementing least-constraining-value: words are ordered ascending by the
/// number of neighbouring domains in which they appear, so that words ruling out the fewest
/// candidates of the crossing slots are tried first. Ties are broken by word id, which is the
/// lexicographic order of the words.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastConstraining;

impl WordSelector for LeastConstraining {
    fn order_words(&mut self, context: &SelectionContext, slot: SlotId) -> Vec<WordId> {
        context
            .domain(slot)
            .sorted_by_key(|&word| (context.num_neighbours_containing(slot, word), word))
            .collect()
    }
}
