//! Contains the strategies for ordering the candidate words of a selected slot.
mod least_constraining;
mod lexicographic;
mod word_selector;

pub use least_constraining::LeastConstraining;
pub use lexicographic::Lexicographic;
pub use word_selector::WordSelector;
