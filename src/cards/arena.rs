//! Card storage with handle-based ownership.
//!
//! Every card in a session lives in one `CardArena`, keyed by `CardId`.
//! Piles, the stock, and the foundation hold handles, never cards, so a card
//! belongs to exactly one collection at any time: moving a card means moving
//! its handle. This rules out the double-reference aliasing that is possible
//! when collections share mutable card objects.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::{Card, Suit};

/// Handle to a card in a `CardArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Owning storage for every card in a session.
///
/// Indexing with a `CardId` the arena did not allocate is a programmer error
/// and panics; use `get` for fallible lookup.
#[derive(Clone, Debug, Default)]
pub struct CardArena {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new face-down card and return its handle.
    pub fn alloc(&mut self, suit: Suit, rank: u8) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.insert(id, Card::new(suit, rank));
        id
    }

    /// Fallible lookup.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Fallible mutable lookup.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Toggle a card's orientation.
    pub fn flip(&mut self, id: CardId) {
        self[id].flip();
    }

    /// Set a card's orientation.
    pub fn set_face_up(&mut self, id: CardId, face_up: bool) {
        self[id].face_up = face_up;
    }

    /// Whether a card is face-up.
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self[id].face_up
    }

    /// Number of cards allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Index<CardId> for CardArena {
    type Output = Card;

    fn index(&self, id: CardId) -> &Card {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("{id} not allocated in this arena"))
    }
}

impl IndexMut<CardId> for CardArena {
    fn index_mut(&mut self, id: CardId) -> &mut Card {
        self.cards
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{id} not allocated in this arena"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::KING;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = CardArena::new();

        let id = arena.alloc(Suit::Spade, KING);
        let other = arena.alloc(Suit::Heart, 2);

        assert_ne!(id, other);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[id].suit, Suit::Spade);
        assert_eq!(arena[id].rank, KING);
        assert_eq!(arena[other].suit, Suit::Heart);
    }

    #[test]
    fn test_alloc_starts_face_down() {
        let mut arena = CardArena::new();
        let id = arena.alloc(Suit::Club, 5);
        assert!(!arena.is_face_up(id));
    }

    #[test]
    fn test_flip_and_set_face_up() {
        let mut arena = CardArena::new();
        let id = arena.alloc(Suit::Diamond, 9);

        arena.flip(id);
        assert!(arena.is_face_up(id));

        arena.set_face_up(id, false);
        assert!(!arena.is_face_up(id));
    }

    #[test]
    fn test_get_unknown_id() {
        let arena = CardArena::new();
        assert!(arena.get(CardId::new(42)).is_none());
    }

    #[test]
    #[should_panic(expected = "not allocated")]
    fn test_index_unknown_id_panics() {
        let arena = CardArena::new();
        let _ = arena[CardId::new(7)];
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::new(3)), "Card(3)");
    }

    #[test]
    fn test_card_id_serialization() {
        let id = CardId::new(17);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
