//! **A terminal explorer for OpenAPI change reports.**
//!
//! `oas-explorer` loads the JSON report produced by an OpenAPI diff
//! engine and lets you navigate it: a hierarchical change tree, the
//! document graph, a revision timeline, and the raw specs side by
//! side, all kept in sync through one selection store.
//!
//! The same change is represented twice in a report, once as a tree
//! node and once as a graph node, with no shared identifier. The
//! [`correlate`] module bridges the two by fingerprinting change
//! content, so a selection made in either representation can be
//! reflected in the other.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The wire types of a report, [`Report`] down to the
//!   individual [`Change`].
//! - **[`correlate`]**: Content fingerprinting and the per-revision
//!   [`CorrelationIndex`] joining tree keys to graph node ids.
//! - **[`store`]**: The [`SelectionStore`] owning all cross-view
//!   selection state, and the [`RevisionNavigator`] state machine for
//!   timeline interaction.
//! - **[`viewmodel`]**: Pure display decoration of the change tree.
//! - **[`tui`]**: The interactive terminal UI.
//! - **[`reports`]**: Non-interactive summary and JSON output.
//!
//! ## Getting Started
//!
//! ```no_run
//! use oas_explorer::{load_report, SelectionStore};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = load_report(Path::new("changes.json"))?;
//!     let store = SelectionStore::new(report);
//!     println!(
//!         "viewing revision {} of {}",
//!         store.selected_report_index(),
//!         store.report().len()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_debug_implementations)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod correlate;
pub mod error;
pub mod loader;
pub mod model;
pub mod reports;
pub mod store;
pub mod tui;
pub mod viewmodel;

pub use correlate::{build_index, fingerprint, CorrelationIndex};
pub use error::{ExplorerError, Result};
pub use loader::{load_report, load_report_str};
pub use model::{Change, ChangeKind, Report, ReportItem};
pub use store::{NavPhase, RevisionNavigator, SelectionStore};
