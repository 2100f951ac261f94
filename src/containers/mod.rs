//! Contains containers which are used by the solver.
mod keyed_vec;
mod sparse_set;

pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;
pub(crate) use sparse_set::SparseSet;
