use itertools::Itertools;

use crate::basic_types::HashMap;
use crate::containers::StorageKey;

/// The index of a word within a [`Vocabulary`].
///
/// The vocabulary is stored sorted, so the order of word ids is the lexicographic order of the
/// words; this makes word ids a deterministic tie-break for value ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId {
    id: u32,
}

impl StorageKey for WordId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        WordId { id: index as u32 }
    }
}

/// The candidate words of a puzzle, interned once at construction.
///
/// Words are deduplicated and sorted ascending; they are expected to consist of uppercase ASCII
/// letters (the word-list parser of the CLI normalises and validates its input before
/// constructing a [`Vocabulary`]).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, WordId>,
}

impl Vocabulary {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let words: Vec<String> = words.into_iter().sorted().dedup().collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(index, word)| (word.clone(), WordId::create_from_index(index)))
            .collect();
        Vocabulary { words, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, word: WordId) -> &str {
        &self.words[word.index()]
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Iterates over all word ids in ascending (lexicographic) order.
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(WordId::create_from_index)
    }
}
