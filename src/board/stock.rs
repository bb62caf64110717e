//! The stock: undealt cards, dealt ten at a time.

use crate::cards::{CardArena, CardId};

use super::pile::{Pile, PileId};

/// The undealt reserve.
///
/// Holds whatever the initial deal left over (50 cards in a standard game),
/// face-down. Deals pop from the top of the sequence, one card per pile, and
/// the stock is never refilled.
#[derive(Clone, Debug, Default)]
pub struct Stock {
    cards: Vec<CardId>,
}

impl Stock {
    /// Create a stock from leftover deck cards, bottom to top.
    #[must_use]
    pub fn new(cards: Vec<CardId>) -> Self {
        Self { cards }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stock is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many full deals remain.
    #[must_use]
    pub fn deals_remaining(&self, pile_count: usize) -> usize {
        if pile_count == 0 {
            0
        } else {
            self.cards.len() / pile_count
        }
    }

    /// Return a card to the stock. Undo only.
    pub fn push_back(&mut self, id: CardId) {
        self.cards.push(id);
    }

    /// Deal one card onto every pile, in ascending pile order.
    ///
    /// Each dealt card is flipped face-up as it lands. Returns what went
    /// where, in deal order, for the action record; `None` (and no mutation)
    /// when the stock holds fewer cards than there are piles. The
    /// player-facing "no pile may be empty" rule is the caller's policy, not
    /// enforced here.
    pub fn deal_one_to_each(
        &mut self,
        arena: &mut CardArena,
        piles: &mut [Pile],
    ) -> Option<Vec<(PileId, CardId)>> {
        if self.cards.len() < piles.len() || piles.is_empty() {
            return None;
        }
        let mut dealt = Vec::with_capacity(piles.len());
        for (index, pile) in piles.iter_mut().enumerate() {
            let id = self.cards.pop().expect("stock length checked above");
            arena.set_face_up(id, true);
            pile.push_dealt(id);
            dealt.push((PileId::new(index as u8), id));
        }
        Some(dealt)
    }
}
