/// The result of invoking a propagator. Propagation either succeeds, or it has emptied the domain
/// of a slot in which case the instance is unsatisfiable.
pub type PropagationStatus = Result<(), EmptyDomain>;

/// Signals that propagation has emptied the domain of a slot.
///
/// An empty domain means no word can be placed in the corresponding slot, so the instance admits
/// no solution. This is a normal outcome of solving, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;
