//! Per-tab rendering.

mod graph;
mod source;
mod stats;
mod timeline;
mod tree;

pub use graph::render_graph;
pub use source::render_source;
pub use stats::render_stats;
pub use timeline::render_timeline;
pub use tree::render_tree;
