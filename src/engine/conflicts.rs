//! The consistency predicate over (partial) assignments.

use crate::basic_types::Assignment;
use crate::basic_types::HashSet;
use crate::puzzle::Crossword;
use crate::puzzle::SlotId;
use crate::puzzle::Vocabulary;
use crate::puzzle::WordId;

/// Returns whether the (partial) assignment is consistent: assigned words are pairwise distinct,
/// every assigned word's length equals its slot's length, and the characters at the overlap
/// indices of every pair of assigned neighbouring slots agree.
pub fn is_consistent(
    assignment: &Assignment,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
) -> bool {
    let mut seen: HashSet<WordId> = HashSet::default();
    for (slot, word) in assignment.iter() {
        if !seen.insert(word) {
            return false;
        }
        if vocabulary.word(word).len() != puzzle.slot(slot).length {
            return false;
        }
        for overlap in puzzle.neighbours(slot) {
            if let Some(neighbour_word) = assignment.value(overlap.neighbour) {
                if !letters_agree(
                    vocabulary,
                    word,
                    overlap.own_index,
                    neighbour_word,
                    overlap.neighbour_index,
                ) {
                    return false;
                }
            }
        }
    }
    true
}

/// Returns whether extending the assignment with `slot := word` keeps it consistent.
///
/// Only the constraints involving `slot` are evaluated, which is sufficient at a search node
/// since the assignment itself is consistent by construction of the search.
pub(crate) fn is_consistent_with(
    assignment: &Assignment,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
    slot: SlotId,
    word: WordId,
) -> bool {
    if assignment.is_word_used(word) {
        return false;
    }
    if vocabulary.word(word).len() != puzzle.slot(slot).length {
        return false;
    }
    puzzle
        .neighbours(slot)
        .iter()
        .all(|overlap| match assignment.value(overlap.neighbour) {
            Some(neighbour_word) => letters_agree(
                vocabulary,
                word,
                overlap.own_index,
                neighbour_word,
                overlap.neighbour_index,
            ),
            None => true,
        })
}

fn letters_agree(
    vocabulary: &Vocabulary,
    word_a: WordId,
    index_a: usize,
    word_b: WordId,
    index_b: usize,
) -> bool {
    vocabulary.word(word_a).as_bytes().get(index_a)
        == vocabulary.word(word_b).as_bytes().get(index_b)
}
