//! The AC-3 arc-consistency engine: a FIFO worklist of directed arcs between overlapping slots,
//! processed until either a fixpoint is reached or some domain becomes empty.

use std::collections::VecDeque;

use log::debug;

use crate::basic_types::EmptyDomain;
use crate::basic_types::HashSet;
use crate::basic_types::PropagationStatus;
use crate::engine::DomainStore;
use crate::engine::SolverStatistics;
use crate::puzzle::Crossword;
use crate::puzzle::SlotId;
use crate::puzzle::Vocabulary;
use crate::puzzle::WordId;

/// Removes from the domain of `x` every word which has no supporting word in the domain of `y`:
/// a word of `y` supports a word of `x` when their characters at the overlap indices between the
/// two slots are equal. A no-op when the slots do not overlap.
///
/// Returns whether the domain of `x` changed.
pub fn revise(
    domains: &mut DomainStore,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
    x: SlotId,
    y: SlotId,
) -> bool {
    let Some((x_index, y_index)) = puzzle.overlap_between(x, y) else {
        return false;
    };
    let to_remove: Vec<WordId> = domains
        .domain(x)
        .filter(|&word_x| {
            let Some(&letter) = vocabulary.word(word_x).as_bytes().get(x_index) else {
                return true;
            };
            !domains
                .domain(y)
                .any(|word_y| vocabulary.word(word_y).as_bytes().get(y_index) == Some(&letter))
        })
        .collect();
    let revised = !to_remove.is_empty();
    for word in to_remove {
        domains.remove(x, word);
    }
    revised
}

/// Runs AC-3 over the full worklist of directed arcs: one arc (x, y) for every overlap of every
/// slot x, in ascending slot order.
///
/// On success every remaining word in every domain has at least one supporting word in every
/// neighbouring domain; this is necessary, not sufficient, for a full solution. Returns
/// [`EmptyDomain`] as soon as some domain becomes empty, in which case the instance is
/// unsatisfiable.
pub fn enforce_arc_consistency(
    domains: &mut DomainStore,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
    statistics: &mut SolverStatistics,
) -> PropagationStatus {
    let arcs: VecDeque<(SlotId, SlotId)> = puzzle
        .slots()
        .flat_map(|x| {
            puzzle
                .neighbours(x)
                .iter()
                .map(move |overlap| (x, overlap.neighbour))
        })
        .collect();
    enforce_arc_consistency_from(domains, puzzle, vocabulary, arcs, statistics)
}

/// Runs AC-3 from an explicitly seeded worklist of directed arcs.
///
/// Whenever revising an arc (x, y) shrinks the domain of x, the arcs (z, x) for every neighbour
/// z of x other than y are pushed back onto the worklist. A membership set keeps the worklist
/// free of duplicate arcs.
pub fn enforce_arc_consistency_from(
    domains: &mut DomainStore,
    puzzle: &Crossword,
    vocabulary: &Vocabulary,
    arcs: VecDeque<(SlotId, SlotId)>,
    statistics: &mut SolverStatistics,
) -> PropagationStatus {
    let mut queue = arcs;
    let mut in_queue: HashSet<(SlotId, SlotId)> = queue.iter().copied().collect();

    while let Some((x, y)) = queue.pop_front() {
        let _ = in_queue.remove(&(x, y));
        statistics.num_revisions += 1;
        if revise(domains, puzzle, vocabulary, x, y) {
            if domains.is_empty(x) {
                debug!("Arc consistency emptied the domain of slot {x:?}");
                return Err(EmptyDomain);
            }
            for overlap in puzzle.neighbours(x) {
                if overlap.neighbour == y {
                    continue;
                }
                let arc = (overlap.neighbour, x);
                if in_queue.insert(arc) {
                    queue.push_back(arc);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::enforce_arc_consistency;
    use super::revise;
    use crate::basic_types::EmptyDomain;
    use crate::engine::DomainStore;
    use crate::engine::SolverStatistics;
    use crate::propagators::enforce_node_consistency;
    use crate::puzzle::Crossword;
    use crate::puzzle::Grid;
    use crate::puzzle::SlotId;
    use crate::puzzle::Vocabulary;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|cell| cell == '_').collect())
                .collect(),
        )
    }

    /// An across slot whose final character is the first character of a down slot.
    fn corner_puzzle() -> (Crossword, Vec<SlotId>) {
        let puzzle = Crossword::new(grid(&["___", "##_", "##_"]));
        let slots = puzzle.slots().collect();
        (puzzle, slots)
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let (puzzle, slots) = corner_puzzle();
        let vocabulary = Vocabulary::new(["CAT", "TIP", "DOG"].map(String::from));
        let mut domains = DomainStore::new(&puzzle, &vocabulary);

        // "DOG" ends in G and no word starts with G; "CAT" is supported by "TIP".
        assert!(revise(&mut domains, &puzzle, &vocabulary, slots[0], slots[1]));
        assert!(!domains.contains(slots[0], vocabulary.id_of("DOG").unwrap()));
        assert!(domains.contains(slots[0], vocabulary.id_of("CAT").unwrap()));
    }

    #[test]
    fn revise_without_overlap_is_a_noop() {
        let puzzle = Crossword::new(grid(&["___", "###", "___"]));
        let slots: Vec<SlotId> = puzzle.slots().collect();
        let vocabulary = Vocabulary::new(["CAT", "DOG"].map(String::from));
        let mut domains = DomainStore::new(&puzzle, &vocabulary);

        assert!(!revise(&mut domains, &puzzle, &vocabulary, slots[0], slots[1]));
        assert_eq!(domains.num_removed_words(), 0);
    }

    #[test]
    fn propagation_reports_an_emptied_domain() {
        let (puzzle, _) = corner_puzzle();
        // Neither word's final letter matches any word's first letter.
        let vocabulary = Vocabulary::new(["CAT", "DOG"].map(String::from));
        let mut domains = DomainStore::new(&puzzle, &vocabulary);
        let mut statistics = SolverStatistics::default();

        let result =
            enforce_arc_consistency(&mut domains, &puzzle, &vocabulary, &mut statistics);
        assert_eq!(result, Err(EmptyDomain));
    }

    #[test]
    fn propagation_reaches_a_fixpoint() {
        let (puzzle, slots) = corner_puzzle();
        let vocabulary = Vocabulary::new(["CAT", "TIP", "TOP", "DOG"].map(String::from));
        let mut domains = DomainStore::new(&puzzle, &vocabulary);
        let mut statistics = SolverStatistics::default();

        enforce_node_consistency(&mut domains, &puzzle, &vocabulary);
        assert!(
            enforce_arc_consistency(&mut domains, &puzzle, &vocabulary, &mut statistics).is_ok()
        );
        let sizes: Vec<usize> = slots.iter().map(|&slot| domains.size(slot)).collect();
        let removed = domains.num_removed_words();

        // A second invocation removes nothing.
        assert!(
            enforce_arc_consistency(&mut domains, &puzzle, &vocabulary, &mut statistics).is_ok()
        );
        assert_eq!(
            slots.iter().map(|&slot| domains.size(slot)).collect::<Vec<_>>(),
            sizes
        );
        assert_eq!(domains.num_removed_words(), removed);
    }
}
