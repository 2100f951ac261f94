use log::debug;

use crate::engine::DomainStore;
use crate::puzzle::Crossword;
use crate::puzzle::Vocabulary;
use crate::puzzle::WordId;

/// Shrinks the domain of every slot to the words whose length equals the slot's length.
///
/// Pure domain mutation: it cannot fail, and a second invocation removes nothing. A domain may
/// become empty, which callers detect through
/// [`DomainStore::first_empty_domain`].
pub fn enforce_node_consistency(
    domains: &mut DomainStore,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
) {
    let removed_before = domains.num_removed_words();
    for slot_id in puzzle.slots() {
        let length = puzzle.slot(slot_id).length;
        let to_remove: Vec<WordId> = domains
            .domain(slot_id)
            .filter(|&word| vocabulary.word(word).len() != length)
            .collect();
        for word in to_remove {
            domains.remove(slot_id, word);
        }
    }
    debug!(
        "Node consistency removed {} words",
        domains.num_removed_words() - removed_before
    );
}
