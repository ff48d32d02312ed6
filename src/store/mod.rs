//! Selection and navigation state.
//!
//! A single [`SelectionStore`] per loaded report is the source of
//! truth for "what is the user currently looking at": the active
//! change, tree selection and expansion, the pending graph-side
//! selection awaiting reconciliation, and the revision navigation
//! machine. Every view reads from the store and writes back through
//! its setters; mutations are synchronous and never interleave.
//!
//! The report is injected at construction. There is no ambient global
//! state, so multiple stores (multiple loaded reports) coexist freely.

mod navigation;
mod selection;

pub use navigation::{NavPhase, RevisionNavigator};
pub use selection::SelectionStore;
