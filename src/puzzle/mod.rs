//! The puzzle model: the grid of fillable cells, the slots derived from it together with their
//! overlap relation, and the interned vocabulary of candidate words.
mod crossword;
mod grid;
mod slot;
mod vocabulary;

pub use crossword::Crossword;
pub use crossword::Overlap;
pub use grid::Grid;
pub use slot::Direction;
pub use slot::Slot;
pub use slot::SlotId;
pub use vocabulary::Vocabulary;
pub use vocabulary::WordId;
