//! Module graph: the receiving end of discovery.
//!
//! [`ModuleGraph`] keeps every delivered module record (the heavyweight
//! resolution result is dropped on arrival), indexes which modules expose
//! each qualified name, and answers "which module is this symbol's canonical
//! home?" by delegating ambiguous cases to the
//! [`CanonicalizationScorer`](crate::canonical::CanonicalizationScorer).

mod module_graph;

pub use module_graph::{ExposedSymbol, ModuleGraph};
