use crate::containers::KeyedVec;
use crate::containers::SparseSet;
use crate::containers::StorageKey;
use crate::puzzle::Crossword;
use crate::puzzle::SlotId;
use crate::puzzle::Vocabulary;
use crate::puzzle::WordId;

fn word_position(word: &WordId) -> usize {
    word.index()
}

/// The exclusive owner of the candidate-word domains, one per slot.
///
/// Each domain starts as the full vocabulary and only ever shrinks: the store exposes removal but
/// no way of adding words back. Domains are represented as sparse-sets which gives O(1) removal
/// and traversal proportional to the current domain size.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: KeyedVec<SlotId, SparseSet<WordId>>,
    num_removed_words: u64,
}

impl DomainStore {
    /// Creates one full-vocabulary domain per slot of the puzzle.
    pub fn new(puzzle: &Crossword, vocabulary: &Vocabulary) -> Self {
        let mut domains = KeyedVec::new();
        for _ in puzzle.slots() {
            let _ = domains.push(SparseSet::new(vocabulary.ids().collect(), word_position));
        }
        DomainStore {
            domains,
            num_removed_words: 0,
        }
    }

    pub fn size(&self, slot: SlotId) -> usize {
        self.domains[slot].len()
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.domains[slot].is_empty()
    }

    pub fn contains(&self, slot: SlotId, word: WordId) -> bool {
        self.domains[slot].contains(&word)
    }

    /// Iterates over the words currently in the domain of `slot`.
    pub fn domain(&self, slot: SlotId) -> impl Iterator<Item = WordId> + '_ {
        self.domains[slot].iter().copied()
    }

    /// Removes `word` from the domain of `slot`; a no-op when the word is not in the domain.
    pub fn remove(&mut self, slot: SlotId, word: WordId) {
        if self.domains[slot].contains(&word) {
            self.domains[slot].remove(&word);
            self.num_removed_words += 1;
        }
    }

    /// The total number of words removed across all domains since construction.
    pub fn num_removed_words(&self) -> u64 {
        self.num_removed_words
    }

    /// The first slot whose domain is empty, if any.
    pub fn first_empty_domain(&self) -> Option<SlotId> {
        self.domains.keys().find(|&slot| self.domains[slot].is_empty())
    }
}
