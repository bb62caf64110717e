//! # spider-core
//!
//! A spider solitaire rules engine: pile and run mechanics, move legality,
//! hidden-card reveals, completed-run retirement, and a fully reversible
//! action log driving multi-step undo.
//!
//! This crate is the rules core only. It draws nothing and reads no input;
//! a rendering/input layer resolves clicks to pile/position pairs, calls the
//! session API, and redraws from the exposed state.
//!
//! ## Design
//!
//! - **Handles over references**: cards live in one arena; piles, stock,
//!   and foundation hold `CardId` handles, so a card belongs to exactly one
//!   collection at any time.
//! - **Total operations**: there are no fatal errors during play. Illegal
//!   selections, moves, deals, and undos are rejected no-ops reported
//!   through return values.
//! - **Reversible by construction**: every committed mutation logs an
//!   action with enough detail to reverse it exactly, including which card
//!   a removal revealed. Retirements unwind together with the move or deal
//!   that triggered them.
//! - **Deterministic**: deals are reproducible from a `u64` seed.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, the card arena, deck construction
//! - `board`: piles, stock, foundation, and the composed board
//! - `core`: action records, the action log, seeded RNG
//! - `rules`: move execution, selection protocol, undo
//! - `session`: the `GameSession` facade callers drive
//!
//! ## Example
//!
//! ```
//! use spider_core::{GameSession, PileId, SuitCount};
//!
//! let mut session = GameSession::new(SuitCount::One, 42);
//!
//! // Click the top card of pile 0, then drop it on pile 3.
//! let top = session.pile(PileId::new(0)).len() - 1;
//! session.select_at(PileId::new(0), top);
//! session.select_at(PileId::new(3), 0);
//!
//! // Deal a fresh row if allowed, then take it back.
//! if !session.any_pile_empty() {
//!     session.draw_from_stock();
//!     session.undo();
//! }
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export the surface most callers need.
pub use crate::board::{Board, Foundation, Pile, PileId, RunBuf, Stock, PILE_COUNT};
pub use crate::cards::{Card, CardArena, CardId, Suit, SuitCount, DECK_SIZE};
pub use crate::core::{Action, ActionLog, GameRng};
pub use crate::rules::{PendingSelection, SelectOutcome, SelectionProtocol};
pub use crate::session::GameSession;
