//! Inverse application of logged actions.
//!
//! Undo pops the most recent record and reverses it exactly: cards go back
//! where they came from, at the display offsets they had, and any card the
//! action revealed is hidden again.
//!
//! ## The retirement chain
//!
//! Undoing a `Retire` always performs one additional undo. A retire record
//! is only ever logged immediately after the move or deal that completed the
//! run, and the intermediate state - a completed run sitting on its pile,
//! uncollected - is not a position the player ever saw or could return to.
//! The pair is therefore reversed as a unit. A deal that completed several
//! piles logs one `Retire` per pile, so a single undo unwinds the whole
//! group back through the deal. This coupling is intentional; do not
//! flatten it into one-record-per-undo.

use crate::board::Board;
use crate::core::action::{Action, ActionLog};

/// Reverse the most recent action.
///
/// Returns `false` when the log is empty. Retire records chain into the
/// record beneath them as described in the module docs.
pub fn undo_last(board: &mut Board, log: &mut ActionLog) -> bool {
    let Some(action) = log.pop() else {
        return false;
    };
    apply_inverse(board, log, action);
    true
}

fn apply_inverse(board: &mut Board, log: &mut ActionLog, action: Action) {
    match action {
        Action::Deal { dealt } => {
            // Reverse deal order restores the exact stock sequence.
            for &(pile, card) in dealt.iter().rev() {
                board.cards.set_face_up(card, false);
                let popped = board.piles[pile.index()].pop_top();
                debug_assert_eq!(popped, Some(card), "deal undo expects the dealt card on top");
                board.stock.push_back(card);
            }
        }
        Action::Move {
            cards,
            from,
            to,
            origin_ys,
            revealed_below,
        } => {
            if revealed_below {
                hide_top(board, from.index());
            }
            for _ in 0..cards.len() {
                board.piles[to.index()].pop_top();
            }
            for (&card, &y) in cards.iter().zip(origin_ys.iter()) {
                board.piles[from.index()].push_restored(card, y);
            }
        }
        Action::Retire {
            cards,
            from,
            origin_ys,
            revealed_below,
        } => {
            if revealed_below {
                hide_top(board, from.index());
            }
            let run = board.foundation.pop_run();
            debug_assert_eq!(run.as_ref(), Some(&cards), "retire undo expects the latest run");
            for (&card, &y) in cards.iter().zip(origin_ys.iter()) {
                board.piles[from.index()].push_restored(card, y);
            }
            // The paired trigger (move or deal) comes off with it.
            undo_last(board, log);
        }
    }
}

/// Flip a pile's top card back face-down (reversing a reveal).
fn hide_top(board: &mut Board, pile: usize) {
    if let Some(top) = board.piles[pile].top() {
        board.cards.set_face_up(top, false);
    }
}
