//! Tableau piles: run detection, placement, and reveal mechanics.
//!
//! A pile is an ordered column of card handles, bottom to top, plus the
//! vertical display offset each card was given when it landed. Offsets carry
//! no rule meaning; they exist so undo can restore the exact pre-move layout
//! for the renderer.
//!
//! ## Runs
//!
//! The movable unit is a *run*: a contiguous top-aligned block that is
//! entirely face-up, entirely one suit, and descends by exactly one rank per
//! card going up the pile. Run detection is a hard gate - a block that
//! breaks suit or rank anywhere is not movable at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardArena, CardId, KING};

/// Tableau pile identifier (0..9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub u8);

impl PileId {
    /// Create a pile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all pile IDs for a table with `count` piles.
    pub fn all(count: usize) -> impl Iterator<Item = PileId> {
        (0..count as u8).map(PileId)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Vertical gap between cards stacked during the initial deal.
pub const SETUP_GAP: i32 = 10;
/// Vertical gap between face-up cards in a spread run.
pub const RUN_GAP: i32 = 30;

/// Buffer sized for the largest possible run (King through Ace).
pub type RunBuf = SmallVec<[CardId; 13]>;
/// Display offsets matching a `RunBuf`.
pub type OffsetBuf = SmallVec<[i32; 13]>;

/// One tableau column.
///
/// Created empty at deal time and never destroyed; a pile may become empty
/// during play. Mutation goes through the move engine and undo code.
#[derive(Clone, Debug, Default)]
pub struct Pile {
    cards: Vec<CardId>,
    ys: Vec<i32>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Card at `index`, if in range.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Topmost card, if any.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Display offset of the card at `index`, if in range.
    #[must_use]
    pub fn offset_at(&self, index: usize) -> Option<i32> {
        self.ys.get(index).copied()
    }

    fn next_y(&self, gap: i32) -> i32 {
        match self.ys.last() {
            Some(&top_y) => top_y + gap,
            None => 0,
        }
    }

    /// Append one card during the initial deal (tight spacing).
    pub fn push_setup(&mut self, id: CardId) {
        let y = self.next_y(SETUP_GAP);
        self.cards.push(id);
        self.ys.push(y);
    }

    /// Append one card dealt from the stock (run spacing).
    pub fn push_dealt(&mut self, id: CardId) {
        let y = self.next_y(RUN_GAP);
        self.cards.push(id);
        self.ys.push(y);
    }

    /// Append a run moved from another pile, spreading it at run spacing.
    pub fn push_run(&mut self, run: &[CardId]) {
        let mut y = self.next_y(RUN_GAP);
        for &id in run {
            self.cards.push(id);
            self.ys.push(y);
            y += RUN_GAP;
        }
    }

    /// Append one card at an exact offset. Undo only: restores a card to the
    /// position recorded when it was removed.
    pub fn push_restored(&mut self, id: CardId, y: i32) {
        self.cards.push(id);
        self.ys.push(y);
    }

    /// Remove and return the topmost card.
    pub fn pop_top(&mut self) -> Option<CardId> {
        self.ys.pop();
        self.cards.pop()
    }

    /// The movable run starting at `start`, if one exists.
    ///
    /// Returns the handles from `start` through the top iff that whole block
    /// is face-up, one suit, and descends by exactly one rank per step.
    /// Out-of-range positions and broken blocks return `None`; an empty pile
    /// never matches. A single face-up top card is a run of length one.
    #[must_use]
    pub fn movable_run_at(&self, arena: &CardArena, start: usize) -> Option<RunBuf> {
        if start >= self.cards.len() {
            return None;
        }
        let block = &self.cards[start..];
        if block.iter().any(|&id| !arena[id].face_up) {
            return None;
        }
        let contiguous = block
            .windows(2)
            .all(|pair| arena[pair[0]].follows_in_run(arena[pair[1]]));
        if !contiguous {
            return None;
        }
        Some(RunBuf::from_slice(block))
    }

    /// Whether a run whose bottom card is `incoming_bottom` may land here.
    ///
    /// An empty pile takes anything. Otherwise the incoming bottom rank must
    /// be strictly below the current top rank; equal rank is rejected. Suit
    /// does not matter at the join - only runs themselves are suit-bound.
    #[must_use]
    pub fn accepts_run(&self, arena: &CardArena, incoming_bottom: CardId) -> bool {
        match self.top() {
            None => true,
            Some(top) => arena[incoming_bottom].rank < arena[top].rank,
        }
    }

    /// Remove the block from `start` through the top.
    ///
    /// If the removal exposes a face-down card it is flipped face-up and
    /// reported. Returns the removed handles, their display offsets, and the
    /// reveal flag; `None` when `start` is out of range (nothing removed).
    pub fn take_from(
        &mut self,
        arena: &mut CardArena,
        start: usize,
    ) -> Option<(RunBuf, OffsetBuf, bool)> {
        if start >= self.cards.len() {
            return None;
        }
        let taken = RunBuf::from_slice(&self.cards[start..]);
        let ys = OffsetBuf::from_slice(&self.ys[start..]);
        self.cards.truncate(start);
        self.ys.truncate(start);

        let revealed = match self.top() {
            Some(top) if !arena[top].face_up => {
                arena.flip(top);
                true
            }
            _ => false,
        };
        Some((taken, ys, revealed))
    }

    /// Start index of a completed run, if the top thirteen cards are a
    /// face-up, one-suit King-through-Ace block.
    #[must_use]
    pub fn completed_run_start(&self, arena: &CardArena) -> Option<usize> {
        let len = self.cards.len();
        if len < 13 {
            return None;
        }
        let start = len - 13;
        let block = &self.cards[start..];
        if arena[block[0]].rank != KING {
            return None;
        }
        if block.iter().any(|&id| !arena[id].face_up) {
            return None;
        }
        let contiguous = block
            .windows(2)
            .all(|pair| arena[pair[0]].follows_in_run(arena[pair[1]]));
        contiguous.then_some(start)
    }

    /// Whether the pile currently holds a completed run on top.
    #[must_use]
    pub fn has_completed_run(&self, arena: &CardArena) -> bool {
        self.completed_run_start(arena).is_some()
    }

    /// Remove a completed run from the top, with the same reveal mechanics
    /// as any other removal. `None` when no completed run is present.
    pub fn take_completed_run(
        &mut self,
        arena: &mut CardArena,
    ) -> Option<(RunBuf, OffsetBuf, bool)> {
        let start = self.completed_run_start(arena)?;
        self.take_from(arena, start)
    }
}
