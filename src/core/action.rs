//! Reversible action records.
//!
//! Every committed mutation is described by an `Action` holding enough
//! detail to reverse it exactly. Retirement is its own variant rather than a
//! move to a sentinel destination: a tagged variant makes the two-step undo
//! chain explicit instead of hiding it behind a magic pile index.
//!
//! Records are immutable once logged. The log is last-in-first-out; undo
//! pops a record and applies its inverse (see `rules::undo`).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::pile::{OffsetBuf, PileId, RunBuf};
use crate::cards::CardId;

/// One reversible mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Ten cards dealt from the stock, one per pile in pile order.
    Deal {
        /// What landed where, in deal order.
        dealt: Vec<(PileId, CardId)>,
    },

    /// A run moved between piles.
    Move {
        /// The moved cards, bottom of the run first.
        cards: RunBuf,
        /// Origin pile.
        from: PileId,
        /// Destination pile.
        to: PileId,
        /// Pre-move display offsets, index-matched to `cards`.
        origin_ys: OffsetBuf,
        /// Whether removing the run flipped the origin's new top face-up.
        revealed_below: bool,
    },

    /// A completed thirteen-card run retired to the foundation.
    ///
    /// A retire record is only ever logged immediately after the move or
    /// deal that completed the run; undo treats the pair as one unit.
    Retire {
        /// The retired run, King first.
        cards: RunBuf,
        /// The pile the run was removed from.
        from: PileId,
        /// Pre-retirement display offsets, index-matched to `cards`.
        origin_ys: OffsetBuf,
        /// Whether the retirement flipped the pile's new top face-up.
        revealed_below: bool,
    },
}

/// Last-in-first-out record of committed actions.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    records: Vector<Action>,
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed action.
    pub fn record(&mut self, action: Action) {
        self.records.push_back(action);
    }

    /// Remove and return the most recent action.
    pub fn pop(&mut self) -> Option<Action> {
        self.records.pop_back()
    }

    /// The most recent action, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Action> {
        self.records.back()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record (new game).
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
