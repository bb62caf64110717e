//! Top-level game session.
//!
//! `GameSession` composes the board, the selection protocol, the action log,
//! and the RNG behind the small synchronous API an input/rendering layer
//! consumes. One session value owns all state; there are no process-wide
//! globals and no internal concurrency - every call runs to completion
//! before returning.
//!
//! Coordinate resolution is the caller's job: the session accepts a pile ID
//! and a card index, never screen positions. The caller is also responsible
//! for the player-facing "no deal while a pile is empty" rule;
//! `any_pile_empty` exists so it can enforce that before `draw_from_stock`.

use crate::board::{Board, Pile, PileId, RunBuf};
use crate::cards::{Card, CardId, SuitCount};
use crate::core::action::ActionLog;
use crate::core::rng::GameRng;
use crate::rules::selection::{PendingSelection, SelectOutcome, SelectionProtocol};
use crate::rules::{moves, undo};

/// One game of spider: state, rules, and history.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    selection: SelectionProtocol,
    log: ActionLog,
    rng: GameRng,
    suit_count: SuitCount,
}

impl GameSession {
    /// Deal a fresh game at the given difficulty, reproducible from `seed`.
    #[must_use]
    pub fn new(suit_count: SuitCount, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::deal(suit_count, &mut rng);
        Self {
            board,
            selection: SelectionProtocol::new(),
            log: ActionLog::new(),
            rng,
            suit_count,
        }
    }

    /// Start over: redeal (on a forked RNG stream), clear the log and any
    /// pending selection. The difficulty may change between games.
    pub fn reset(&mut self, suit_count: SuitCount) {
        let mut rng = self.rng.fork();
        self.board = Board::deal(suit_count, &mut rng);
        self.rng = rng;
        self.suit_count = suit_count;
        self.selection.cancel();
        self.log.clear();
    }

    /// The difficulty this game was dealt at.
    #[must_use]
    pub fn suit_count(&self) -> SuitCount {
        self.suit_count
    }

    /// Register a click resolved to (`pile`, `position`).
    ///
    /// With no selection armed, a click on a movable run arms it and any
    /// other click is rejected with no state change. With a selection armed,
    /// the click names a destination pile (the position within it does not
    /// matter) and the selection clears whether or not the move is legal -
    /// a failed placement never re-arms.
    pub fn select_at(&mut self, pile: PileId, position: usize) -> SelectOutcome {
        if pile.index() >= self.board.piles().len() {
            // Out-of-range target; also drops any armed selection, as any
            // second click does.
            if self.selection.take().is_some() {
                return SelectOutcome::MoveRejected;
            }
            return SelectOutcome::Rejected;
        }

        if let Some(origin) = self.selection.take() {
            let moved = moves::attempt_move(
                &mut self.board,
                &mut self.log,
                origin.pile,
                origin.start,
                pile,
            );
            if moved {
                SelectOutcome::Moved
            } else {
                SelectOutcome::MoveRejected
            }
        } else if self
            .board
            .pile(pile)
            .movable_run_at(self.board.cards(), position)
            .is_some()
        {
            self.selection.arm(pile, position);
            SelectOutcome::Selected
        } else {
            SelectOutcome::Rejected
        }
    }

    /// Explicitly drop a pending selection.
    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    /// The armed selection, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<PendingSelection> {
        self.selection.pending()
    }

    /// The armed run's card handles, for the caller's highlight.
    #[must_use]
    pub fn selected_run(&self) -> Option<RunBuf> {
        let pending = self.selection.pending()?;
        self.board
            .pile(pending.pile)
            .movable_run_at(self.board.cards(), pending.start)
    }

    /// Deal ten cards from the stock, one per pile.
    ///
    /// Returns `false` when the stock is exhausted. The "no empty pile"
    /// precondition is the caller's policy; check `any_pile_empty` first.
    /// Any pending selection clears, successful or not.
    pub fn draw_from_stock(&mut self) -> bool {
        self.selection.cancel();
        moves::deal_from_stock(&mut self.board, &mut self.log)
    }

    /// Reverse the most recent action (retirements unwind together with the
    /// move or deal that triggered them). Returns `false` on an empty log.
    pub fn undo(&mut self) -> bool {
        undo::undo_last(&mut self.board, &mut self.log)
    }

    /// Whether the whole deck has been retired.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Whether any pile is empty (the caller's deal-gating hook).
    #[must_use]
    pub fn any_pile_empty(&self) -> bool {
        self.board.any_pile_empty()
    }

    // === Renderer views ===

    /// The board (piles, stock, foundation, cards), read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A pile by ID.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        self.board.pile(id)
    }

    /// A card by handle.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.board.card(id)
    }

    /// Cards remaining in the stock.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.board.stock().len()
    }

    /// Full deals remaining in the stock.
    #[must_use]
    pub fn deals_remaining(&self) -> usize {
        self.board.stock().deals_remaining(self.board.piles().len())
    }

    /// Runs retired so far.
    #[must_use]
    pub fn foundation_runs(&self) -> usize {
        self.board.foundation().len()
    }

    /// Actions currently undoable.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.log.len()
    }

    /// The seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
impl GameSession {
    /// Build a session around a hand-placed board.
    pub(crate) fn with_board(board: Board) -> Self {
        Self {
            board,
            selection: SelectionProtocol::new(),
            log: ActionLog::new(),
            rng: GameRng::new(0),
            suit_count: SuitCount::One,
        }
    }
}
