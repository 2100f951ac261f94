//! Contains the strategies for deciding which slot to branch on next.
mod input_order;
mod most_constrained;
mod slot_selector;

pub use input_order::InputOrder;
pub use most_constrained::MostConstrained;
pub use slot_selector::SlotSelector;
