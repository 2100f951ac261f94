//! Provides structures and traits to define the decision making procedure of the solver: which
//! slot to branch on next and in which order to try its candidate words.
mod brancher;
pub mod branchers;
mod selection_context;
pub mod slot_selection;
pub mod word_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;
pub use slot_selection::*;
pub use word_selection::*;

use crate::branching::branchers::IndependentSlotWordBrancher;

/// The default search strategy of the solver: minimum-remaining-values slot selection with
/// least-constraining-value word ordering.
pub type DefaultBrancher = IndependentSlotWordBrancher<MostConstrained, LeastConstraining>;
