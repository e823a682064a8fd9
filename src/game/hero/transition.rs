// Pending transition slot
//
// Holds at most one requested mode. The first request observed in a tick
// wins; anything requested after it, or after a transition was already
// committed in the same tick, is dropped. Requests raised while a
// transition is being committed (from `exit` or `enter`) are always dropped.

use log::debug;

use super::modes::{HeroMode, ModeKind};

/// Transition requests collected between two commit points
#[derive(Debug, Default)]
pub struct TransitionRequests {
    pending: Option<Box<dyn HeroMode>>,
    committed_this_tick: bool,
    in_commit: bool,
}

impl TransitionRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a transition. Returns false when the request was discarded.
    pub fn request(&mut self, mode: Box<dyn HeroMode>) -> bool {
        if self.in_commit {
            debug!(
                "Discarding transition to {}: requested while a transition is being committed",
                mode.kind().name()
            );
            return false;
        }
        if self.committed_this_tick {
            debug!(
                "Discarding transition to {}: a transition was already committed this tick",
                mode.kind().name()
            );
            return false;
        }
        if let Some(pending) = &self.pending {
            debug!(
                "Discarding transition to {}: {} was requested first",
                mode.kind().name(),
                pending.kind().name()
            );
            return false;
        }
        self.pending = Some(mode);
        true
    }

    /// Kind of the pending request, if any
    pub fn pending_kind(&self) -> Option<ModeKind> {
        self.pending.as_ref().map(|mode| mode.kind())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_committed_this_tick(&self) -> bool {
        self.committed_this_tick
    }

    /// The commit point of the current tick has passed: requests are
    /// accepted again. A pending request stays pending.
    pub(crate) fn end_tick(&mut self) {
        self.committed_this_tick = false;
    }

    pub(crate) fn begin_commit(&mut self) {
        self.in_commit = true;
    }

    pub(crate) fn end_commit(&mut self) {
        self.in_commit = false;
    }

    pub(crate) fn take(&mut self) -> Option<Box<dyn HeroMode>> {
        self.pending.take()
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed_this_tick = true;
    }

    /// Drop the pending request, e.g. when a forced transition overrides it
    pub(crate) fn discard_pending(&mut self) {
        if let Some(mode) = self.pending.take() {
            debug!("Discarding pending transition to {}", mode.kind().name());
        }
    }
}
