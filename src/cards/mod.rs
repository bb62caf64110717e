//! Card identity, storage, and deck construction.
//!
//! - `card`: `Suit`, rank constants, the `Card` value itself
//! - `arena`: `CardId` handles and the owning `CardArena`
//! - `deck`: `SuitCount` and the 104-card multi-deck builder

pub mod arena;
pub mod card;
pub mod deck;

pub use arena::{CardArena, CardId};
pub use card::{Card, Suit, ACE, JACK, KING, QUEEN, RANKS_PER_SUIT};
pub use deck::{build_deck, SuitCount, DECK_SIZE};
