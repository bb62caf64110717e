//! The table: ten piles, the stock, the foundation, and the card arena.
//!
//! `Board` owns all card state for one game. The rules layer is its only
//! mutator; everything public here is either a constructor or a read-only
//! view for the caller's renderer.

pub mod foundation;
pub mod pile;
pub mod stock;

pub use foundation::Foundation;
pub use pile::{Pile, PileId, RunBuf, OffsetBuf, RUN_GAP, SETUP_GAP};
pub use stock::Stock;

use crate::cards::{build_deck, CardArena, CardId, SuitCount, DECK_SIZE};
use crate::core::rng::GameRng;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 10;
/// Piles that receive six cards in the initial deal (the rest get five).
const TALL_PILES: usize = 4;
/// Cards dealt to each of the first four piles.
const TALL_PILE_CARDS: usize = 6;
/// Cards dealt to each of the remaining six piles.
const SHORT_PILE_CARDS: usize = 5;

/// All card state for one game.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cards: CardArena,
    pub(crate) piles: Vec<Pile>,
    pub(crate) stock: Stock,
    pub(crate) foundation: Foundation,
}

impl Board {
    /// Build, shuffle, and deal a fresh game.
    ///
    /// The first four piles get six cards, the remaining six get five, top
    /// card of each pile face-up; the 50 leftover cards form the stock.
    #[must_use]
    pub fn deal(suit_count: SuitCount, rng: &mut GameRng) -> Self {
        let mut cards = CardArena::new();
        let mut deck = build_deck(&mut cards, suit_count);
        rng.shuffle(&mut deck);

        let mut piles = vec![Pile::new(); PILE_COUNT];
        let mut next = deck.into_iter();
        for (index, pile) in piles.iter_mut().enumerate() {
            let depth = if index < TALL_PILES {
                TALL_PILE_CARDS
            } else {
                SHORT_PILE_CARDS
            };
            for row in 0..depth {
                let id = next.next().expect("deck covers the initial deal");
                if row == depth - 1 {
                    cards.set_face_up(id, true);
                }
                pile.push_setup(id);
            }
        }
        let stock = Stock::new(next.collect());

        Self {
            cards,
            piles,
            stock,
            foundation: Foundation::new(),
        }
    }

    /// The card arena.
    #[must_use]
    pub fn cards(&self) -> &CardArena {
        &self.cards
    }

    /// A pile by ID.
    ///
    /// Panics on an out-of-range ID; there are always exactly ten piles.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// All piles in index order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// The stock.
    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// The foundation.
    #[must_use]
    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    /// Whether any pile is empty. The caller's deal-gating policy hook.
    #[must_use]
    pub fn any_pile_empty(&self) -> bool {
        self.piles.iter().any(Pile::is_empty)
    }

    /// Whether the whole deck has been retired.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundation.card_count() == DECK_SIZE
    }

    /// Cards across piles, stock, and foundation. Always `DECK_SIZE`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_piles: usize = self.piles.iter().map(Pile::len).sum();
        in_piles + self.stock.len() + self.foundation.card_count()
    }

    /// Resolve a pile's card handle, for renderers walking pile contents.
    #[must_use]
    pub fn card(&self, id: CardId) -> &crate::cards::Card {
        &self.cards[id]
    }
}
