use crate::basic_types::Assignment;
use crate::containers::KeyedVec;
use crate::puzzle::SlotId;
use crate::puzzle::Vocabulary;
use crate::xword_assert_eq_simple;
use crate::xword_assert_simple;

/// A complete assignment of words to slots, resolved to owned strings and handed to callers by
/// [`Solver::satisfy`][crate::Solver::satisfy].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    words: KeyedVec<SlotId, String>,
}

impl Solution {
    pub(crate) fn new(assignment: &Assignment, vocabulary: &Vocabulary) -> Self {
        xword_assert_simple!(assignment.is_complete());
        let mut words = KeyedVec::default();
        for (slot, word) in assignment.iter() {
            let key = words.push(vocabulary.word(word).to_owned());
            xword_assert_eq_simple!(key, slot);
        }
        Solution { words }
    }

    pub fn num_slots(&self) -> usize {
        self.words.len()
    }

    /// The word placed in the given slot.
    pub fn word(&self, slot: SlotId) -> &str {
        &self.words[slot]
    }

    /// Iterates over the (slot, word) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str)> {
        self.words.keys().map(|slot| (slot, self.words[slot].as_str()))
    }
}
