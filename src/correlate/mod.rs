//! Cross-representation identity correlation.
//!
//! A revision's change set arrives twice: once as a hierarchical tree
//! and once as a dependency graph, produced independently by the
//! engine with unrelated identifier spaces. This module establishes
//! the join between them: a deterministic fingerprint over a change's
//! identifying fields ([`fingerprint`]) and an index built from one
//! tree walk plus one graph pass ([`CorrelationIndex`]) that maps tree
//! keys to graph node ids and back.
//!
//! The index is rebuilt wholesale whenever the active revision
//! changes; it is never patched incrementally.

mod fingerprint;
mod index;

pub use fingerprint::fingerprint;
pub use index::{build_index, CorrelationIndex};
