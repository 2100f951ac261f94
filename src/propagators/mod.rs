//! Contains the propagators which filter the domains before search: node consistency (the unary
//! length constraint) and arc consistency over the binary overlap constraints.
mod arc_consistency;
mod node_consistency;

pub use arc_consistency::enforce_arc_consistency;
pub use arc_consistency::enforce_arc_consistency_from;
pub use arc_consistency::revise;
pub use node_consistency::enforce_node_consistency;
