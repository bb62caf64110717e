//! Playing card identity and orientation.
//!
//! A `Card` is an immutable (suit, rank) pair plus a mutable face-up flag.
//! Position on the table is not card state: piles track where their cards
//! sit, and the arena tracks which collection owns each card.

use serde::{Deserialize, Serialize};

/// Ace rank (lowest).
pub const ACE: u8 = 1;
/// Jack rank.
pub const JACK: u8 = 11;
/// Queen rank.
pub const QUEEN: u8 = 12;
/// King rank (highest).
pub const KING: u8 = 13;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Whether the suit prints red (hearts, diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Club => "club",
        };
        write!(f, "{name}")
    }
}

/// A playing card.
///
/// Suit and rank are fixed at construction; only the face-up flag mutates.
/// Cards start face-down, the orientation they have in the stock and in the
/// hidden part of a freshly dealt pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Suit, fixed at construction.
    pub suit: Suit,

    /// Rank 1..=13 (Ace..King), fixed at construction.
    pub rank: u8,

    /// Orientation: face-up cards are visible and candidates for movement.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank out of range: {rank}");
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Toggle the face-up flag.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Rank as an ordering key (Ace low, King high).
    #[must_use]
    pub const fn rank_order(self) -> u8 {
        self.rank
    }

    /// Whether `self` sits directly below `upper` in a movable run:
    /// same suit, `upper` exactly one rank lower.
    #[must_use]
    pub fn follows_in_run(self, upper: Card) -> bool {
        self.suit == upper.suit && upper.rank + 1 == self.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.rank {
            ACE => "A".to_string(),
            JACK => "J".to_string(),
            QUEEN => "Q".to_string(),
            KING => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{} {}", self.suit, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_starts_face_down() {
        let card = Card::new(Suit::Spade, 7);
        assert!(!card.face_up);
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, 7);
    }

    #[test]
    fn test_flip_toggles() {
        let mut card = Card::new(Suit::Heart, ACE);
        card.flip();
        assert!(card.face_up);
        card.flip();
        assert!(!card.face_up);
    }

    #[test]
    fn test_rank_order() {
        assert_eq!(Card::new(Suit::Club, ACE).rank_order(), 1);
        assert_eq!(Card::new(Suit::Club, KING).rank_order(), 13);
    }

    #[test]
    fn test_follows_in_run() {
        let nine = Card::new(Suit::Spade, 9);
        let eight_same = Card::new(Suit::Spade, 8);
        let eight_other = Card::new(Suit::Heart, 8);
        let seven = Card::new(Suit::Spade, 7);

        assert!(nine.follows_in_run(eight_same));
        assert!(!nine.follows_in_run(eight_other)); // suit break
        assert!(!nine.follows_in_run(seven)); // rank gap
        assert!(!eight_same.follows_in_run(nine)); // wrong direction
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Heart.is_red());
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Spade.is_red());
        assert!(!Suit::Club.is_red());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Card::new(Suit::Spade, ACE)), "spade A");
        assert_eq!(format!("{}", Card::new(Suit::Heart, QUEEN)), "heart Q");
        assert_eq!(format!("{}", Card::new(Suit::Club, 10)), "club 10");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Diamond, JACK);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
