//! Data model for change reports.
//!
//! The external change-detection engine emits a single JSON `Report`
//! document per analyzed specification history. Everything in this
//! module is a faithful, typed mirror of that wire format: the report
//! container, per-revision items, the hierarchical change tree, the
//! dependency graph, and aggregate statistics.
//!
//! All model values are immutable after deserialization. Display
//! decoration happens in [`crate::viewmodel`] on a parallel structure,
//! never by mutating these types.

mod change;
mod graph;
mod report;
mod tree;

pub use change::{Change, ChangeContext, ChangeKind};
pub use graph::{Edge, GraphData, GraphNode};
pub use report::{ChangeStatistics, CommitStatistics, Report, ReportItem};
pub use tree::TreeNode;
