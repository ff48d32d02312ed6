//! Revision navigation state machine.

/// Interaction phase of the revision timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    /// No interaction since load.
    Idle,
    /// Transient preview (hover / scrub) of a revision.
    Highlighted(usize),
    /// Committed choice driving the active report item.
    Selected(usize),
}

/// State machine over the revision sequence.
///
/// Revisions are indexed from most recent (0) to earliest (last).
/// `highlight` is a side-effect-free preview; `select` commits the
/// choice and is what triggers the store's revision-change cascade.
/// The committed and highlighted indices are deliberately two fields
/// of this one machine so a hover can never fire the cascade.
#[derive(Debug, Clone)]
pub struct RevisionNavigator {
    revision_count: usize,
    phase: NavPhase,
    selected: usize,
    highlighted: usize,
}

impl RevisionNavigator {
    /// Create a navigator over `revision_count` revisions, starting at
    /// the earliest revision with no interaction recorded.
    ///
    /// # Panics
    /// Panics when `revision_count` is zero; the loader rejects empty
    /// reports before any navigator exists.
    #[must_use]
    pub fn new(revision_count: usize) -> Self {
        assert!(revision_count > 0, "cannot navigate an empty report");
        let earliest = revision_count - 1;
        Self {
            revision_count,
            phase: NavPhase::Idle,
            selected: earliest,
            highlighted: earliest,
        }
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Committed revision index (drives the active report item).
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Previewed revision index (timeline hover marker).
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Total number of revisions.
    #[must_use]
    pub const fn revision_count(&self) -> usize {
        self.revision_count
    }

    /// Preview a revision without committing to it.
    ///
    /// # Panics
    /// Panics on an out-of-range index; a correctly wired view can
    /// never produce one.
    pub fn highlight(&mut self, idx: usize) {
        assert!(
            idx < self.revision_count,
            "revision index {idx} out of range (0..{})",
            self.revision_count
        );
        self.highlighted = idx;
        self.phase = NavPhase::Highlighted(idx);
    }

    /// Commit to a revision. Returns true when the committed index
    /// actually changed, which is the caller's signal to run the
    /// revision-change cascade.
    ///
    /// # Panics
    /// Panics on an out-of-range index. This is a contract violation,
    /// never clamped or swallowed.
    pub fn select(&mut self, idx: usize) -> bool {
        assert!(
            idx < self.revision_count,
            "revision index {idx} out of range (0..{})",
            self.revision_count
        );
        let changed = idx != self.selected;
        self.selected = idx;
        self.highlighted = idx;
        self.phase = NavPhase::Selected(idx);
        changed
    }
}
