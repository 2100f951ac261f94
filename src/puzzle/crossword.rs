use log::warn;

use crate::containers::KeyedVec;
use crate::puzzle::Direction;
use crate::puzzle::Grid;
use crate::puzzle::Slot;
use crate::puzzle::SlotId;

/// A shared cell between two crossing slots: the `own_index`-th character of the slot which owns
/// this overlap must equal the `neighbour_index`-th character of `neighbour`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub neighbour: SlotId,
    pub own_index: usize,
    pub neighbour_index: usize,
}

/// A crossword puzzle: the grid together with the slots derived from it and their overlap
/// relation.
///
/// Slots are maximal runs of at least two fillable cells; runs of a single cell do not form a
/// slot. The slots are stored sorted by their identity (row, column, direction, length), and
/// [`SlotId`]s are indices into that order. Per-slot neighbour lists are sorted by [`SlotId`].
#[derive(Debug, Clone)]
pub struct Crossword {
    grid: Grid,
    slots: KeyedVec<SlotId, Slot>,
    neighbours: KeyedVec<SlotId, Vec<Overlap>>,
}

impl Crossword {
    /// Scans the grid for slots and computes the overlap relation between them.
    pub fn new(grid: Grid) -> Self {
        let mut scanned = scan_across(&grid);
        scanned.extend(scan_down(&grid));
        scanned.sort();
        if scanned.is_empty() {
            warn!("The grid does not contain any slots");
        }

        let mut slots: KeyedVec<SlotId, Slot> = KeyedVec::new();
        for slot in scanned {
            let _ = slots.push(slot);
        }

        let mut neighbours: KeyedVec<SlotId, Vec<Overlap>> = KeyedVec::new();
        neighbours.resize(slots.len(), Vec::new());
        for a in slots.keys() {
            for b in slots.keys().filter(|&b| a < b) {
                if let Some((a_index, b_index)) = shared_cell(slots[a], slots[b]) {
                    neighbours[a].push(Overlap {
                        neighbour: b,
                        own_index: a_index,
                        neighbour_index: b_index,
                    });
                    neighbours[b].push(Overlap {
                        neighbour: a,
                        own_index: b_index,
                        neighbour_index: a_index,
                    });
                }
            }
        }

        Crossword {
            grid,
            slots,
            neighbours,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over all slot ids in identity order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots.keys()
    }

    pub fn slot(&self, id: SlotId) -> Slot {
        self.slots[id]
    }

    /// The overlaps of the given slot, sorted by neighbouring slot id.
    pub fn neighbours(&self, id: SlotId) -> &[Overlap] {
        &self.neighbours[id]
    }

    /// The number of slots which cross the given slot.
    pub fn degree(&self, id: SlotId) -> usize {
        self.neighbours[id].len()
    }

    /// The pair of character indices which must agree between `a` and `b`, or [`None`] when the
    /// two slots do not share a cell.
    pub fn overlap_between(&self, a: SlotId, b: SlotId) -> Option<(usize, usize)> {
        self.neighbours[a]
            .iter()
            .find(|overlap| overlap.neighbour == b)
            .map(|overlap| (overlap.own_index, overlap.neighbour_index))
    }
}

fn scan_across(grid: &Grid) -> Vec<Slot> {
    let mut slots = Vec::new();
    for row in 0..grid.height() {
        let mut start = None;
        for column in 0..=grid.width() {
            if column < grid.width() && grid.is_fillable(row, column) {
                let _ = start.get_or_insert(column);
            } else if let Some(first_column) = start.take() {
                let length = column - first_column;
                if length >= 2 {
                    slots.push(Slot {
                        row,
                        column: first_column,
                        direction: Direction::Across,
                        length,
                    });
                }
            }
        }
    }
    slots
}

fn scan_down(grid: &Grid) -> Vec<Slot> {
    let mut slots = Vec::new();
    for column in 0..grid.width() {
        let mut start = None;
        for row in 0..=grid.height() {
            if row < grid.height() && grid.is_fillable(row, column) {
                let _ = start.get_or_insert(row);
            } else if let Some(first_row) = start.take() {
                let length = row - first_row;
                if length >= 2 {
                    slots.push(Slot {
                        row: first_row,
                        column,
                        direction: Direction::Down,
                        length,
                    });
                }
            }
        }
    }
    slots
}

/// The overlap between two slots, as a pair of character indices. Two slots in the same direction
/// never share a cell since same-direction runs are maximal and therefore disjoint.
fn shared_cell(a: Slot, b: Slot) -> Option<(usize, usize)> {
    if a.direction == b.direction {
        return None;
    }
    let (across, down) = if a.direction == Direction::Across {
        (a, b)
    } else {
        (b, a)
    };
    let crosses_column = across.column <= down.column && down.column < across.column + across.length;
    let crosses_row = down.row <= across.row && across.row < down.row + down.length;
    if !(crosses_column && crosses_row) {
        return None;
    }
    let across_index = down.column - across.column;
    let down_index = across.row - down.row;
    if a.direction == Direction::Across {
        Some((across_index, down_index))
    } else {
        Some((down_index, across_index))
    }
}
