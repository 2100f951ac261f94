//! Contains structures which are common to the whole crate.
mod assignment;
mod hash_structures;
mod letter_grid;
mod propagation_status;
mod solution;

pub use assignment::Assignment;
pub(crate) use hash_structures::HashMap;
pub(crate) use hash_structures::HashSet;
pub use letter_grid::LetterGrid;
pub use propagation_status::EmptyDomain;
pub use propagation_status::PropagationStatus;
pub use solution::Solution;
