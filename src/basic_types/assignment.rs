use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::puzzle::SlotId;
use crate::puzzle::WordId;
use crate::xword_assert_simple;

/// A partial mapping from slots to words which is grown and shrunk along the current search path
/// via [`assign`][Assignment::assign] and [`unassign`][Assignment::unassign].
///
/// Besides the per-slot bindings, a used-word mask is kept so that checking whether a word is
/// already part of the assignment is O(1). The mask is reliable as long as the assigned words are
/// pairwise distinct, which the search maintains by checking consistency before every
/// [`assign`][Assignment::assign].
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The word bound to each slot, [`None`] for unassigned slots.
    words: KeyedVec<SlotId, Option<WordId>>,
    /// For every word in the vocabulary, whether it is currently bound to some slot.
    used_words: Vec<bool>,
    /// The number of slots which are currently bound to a word.
    num_assigned: usize,
}

impl Assignment {
    /// Creates an empty assignment for `num_slots` slots over a vocabulary of `num_words` words.
    pub fn new(num_slots: usize, num_words: usize) -> Self {
        let mut words = KeyedVec::default();
        words.resize(num_slots, None);
        Assignment {
            words,
            used_words: vec![false; num_words],
            num_assigned: 0,
        }
    }

    pub fn num_slots(&self) -> usize {
        self.words.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    /// Whether every slot is bound to a word.
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.words.len()
    }

    pub fn is_assigned(&self, slot: SlotId) -> bool {
        self.words[slot].is_some()
    }

    /// The word bound to `slot`, or [`None`] when the slot is unassigned.
    pub fn value(&self, slot: SlotId) -> Option<WordId> {
        self.words[slot]
    }

    /// Whether `word` is bound to some slot.
    pub fn is_word_used(&self, word: WordId) -> bool {
        self.used_words[word.index()]
    }

    /// Binds `word` to `slot`. The slot must currently be unassigned.
    pub fn assign(&mut self, slot: SlotId, word: WordId) {
        xword_assert_simple!(self.words[slot].is_none());
        self.words[slot] = Some(word);
        self.used_words[word.index()] = true;
        self.num_assigned += 1;
    }

    /// Removes the binding of `slot`, undoing the matching [`assign`][Assignment::assign]. The
    /// slot must currently be assigned.
    pub fn unassign(&mut self, slot: SlotId) {
        let word = self.words[slot].take();
        xword_assert_simple!(word.is_some());
        if let Some(word) = word {
            self.used_words[word.index()] = false;
            self.num_assigned -= 1;
        }
    }

    /// Iterates over the assigned (slot, word) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words
            .keys()
            .filter_map(|slot| self.words[slot].map(|word| (slot, word)))
    }
}
