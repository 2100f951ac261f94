//! The user-facing API of the solver.
pub(crate) mod outputs;
pub(crate) mod solver;
