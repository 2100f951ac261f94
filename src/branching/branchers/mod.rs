//! Contains the [`Brancher`][crate::branching::Brancher] implementations.
mod independent_slot_word_brancher;

pub use independent_slot_word_brancher::IndependentSlotWordBrancher;
