//! Two-click move registration.
//!
//! The first resolved click arms a pending selection (origin pile plus the
//! index where the run starts); the second names a destination pile and
//! always disarms, whether or not the move succeeds. A failed placement does
//! not re-arm the selection - the player clicks again from scratch.

use serde::{Deserialize, Serialize};

use crate::board::pile::PileId;

/// A pending origin selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    /// Pile the run would move from.
    pub pile: PileId,
    /// Index within the pile where the selected run starts.
    pub start: usize,
}

/// Selection state machine: `Idle` or `Pending`. No terminal state; it
/// cycles for the life of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionProtocol {
    pending: Option<PendingSelection>,
}

impl SelectionProtocol {
    /// Create an idle protocol.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a selection is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The armed selection, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingSelection> {
        self.pending
    }

    /// Arm a selection. The caller has already validated the run.
    pub fn arm(&mut self, pile: PileId, start: usize) {
        self.pending = Some(PendingSelection { pile, start });
    }

    /// Disarm and return what was armed.
    pub fn take(&mut self) -> Option<PendingSelection> {
        self.pending.take()
    }

    /// Explicit deselect: disarm without a move attempt.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// What a click accomplished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First click resolved a movable run; selection is armed.
    Selected,
    /// Second click completed a legal move (and possibly a retirement).
    Moved,
    /// Second click named a destination that refused the run; selection
    /// cleared.
    MoveRejected,
    /// Click did not resolve to a movable run; state unchanged.
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let protocol = SelectionProtocol::new();
        assert!(!protocol.is_pending());
        assert!(protocol.pending().is_none());
    }

    #[test]
    fn test_arm_and_take() {
        let mut protocol = SelectionProtocol::new();
        protocol.arm(PileId::new(3), 2);

        assert!(protocol.is_pending());
        let pending = protocol.take().unwrap();
        assert_eq!(pending.pile, PileId::new(3));
        assert_eq!(pending.start, 2);
        assert!(!protocol.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut protocol = SelectionProtocol::new();
        protocol.arm(PileId::new(0), 0);
        protocol.cancel();

        assert!(!protocol.is_pending());
        assert!(protocol.take().is_none());
    }

    #[test]
    fn test_rearming_replaces() {
        let mut protocol = SelectionProtocol::new();
        protocol.arm(PileId::new(1), 4);
        protocol.arm(PileId::new(2), 0);

        let pending = protocol.take().unwrap();
        assert_eq!(pending.pile, PileId::new(2));
    }
}
