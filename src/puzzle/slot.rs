use crate::containers::StorageKey;
use crate::xword_assert_moderate;

/// The direction in which a slot runs through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

/// A word slot: a maximal run of at least two fillable cells in a single direction.
///
/// The identity of a slot is the tuple (row, column, direction, length); equality, hashing, and
/// ordering all follow that tuple, with [`Direction::Across`] ordered before
/// [`Direction::Down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// The row of the first cell of the slot.
    pub row: usize,
    /// The column of the first cell of the slot.
    pub column: usize,
    pub direction: Direction,
    /// The number of cells covered by the slot, which is also the required word length.
    pub length: usize,
}

impl Slot {
    /// The grid cell holding the `index`-th character of the slot's word.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        xword_assert_moderate!(index < self.length);
        match self.direction {
            Direction::Across => (self.row, self.column + index),
            Direction::Down => (self.row + index, self.column),
        }
    }
}

/// The index of a slot within a puzzle.
///
/// Slots are numbered in their identity order (see [`Slot`]), so slot ids provide a deterministic
/// total order for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    id: u32,
}

impl StorageKey for SlotId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        SlotId { id: index as u32 }
    }
}
