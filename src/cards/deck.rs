//! Multi-deck construction.
//!
//! Spider is always played with 104 cards; the suit count only changes the
//! variety. One suit repeats eight times, two suits four times, four suits
//! twice. Three suits are not offered: 3 × 13 does not divide 104.

use serde::{Deserialize, Serialize};

use super::arena::{CardArena, CardId};
use super::card::{Suit, RANKS_PER_SUIT};

/// Total cards in every spider deck, regardless of suit variety.
pub const DECK_SIZE: usize = 104;

/// How many distinct suits the deck is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitCount {
    /// Spades only, eight copies. The beginner game.
    One,
    /// Spades and hearts, four copies each.
    Two,
    /// All four suits, two copies each.
    Four,
}

impl SuitCount {
    /// The suits used at this difficulty.
    #[must_use]
    pub const fn suits(self) -> &'static [Suit] {
        match self {
            SuitCount::One => &[Suit::Spade],
            SuitCount::Two => &[Suit::Spade, Suit::Heart],
            SuitCount::Four => &Suit::ALL,
        }
    }

    /// How many copies of each suit the 104-card deck needs.
    #[must_use]
    pub const fn copies(self) -> usize {
        DECK_SIZE / (RANKS_PER_SUIT as usize) / self.suits().len()
    }

    /// Numeric suit count.
    #[must_use]
    pub const fn count(self) -> u8 {
        self.suits().len() as u8
    }

    /// Parse a player-facing suit count.
    ///
    /// Only 1, 2, and 4 are valid.
    #[must_use]
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(SuitCount::One),
            2 => Some(SuitCount::Two),
            4 => Some(SuitCount::Four),
            _ => None,
        }
    }
}

/// Allocate the full 104-card deck into `arena`, face-down, unshuffled.
///
/// Returns the handles in allocation order; the caller shuffles.
pub fn build_deck(arena: &mut CardArena, suit_count: SuitCount) -> Vec<CardId> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..suit_count.copies() {
        for &suit in suit_count.suits() {
            for rank in 1..=RANKS_PER_SUIT {
                deck.push(arena.alloc(suit, rank));
            }
        }
    }
    deck
}
