//! Move and deal execution.
//!
//! This module is the only mutator of board state during play. Every
//! committed mutation appends a record to the action log before any
//! follow-up retirement check runs, so the log order always pairs a
//! `Retire` with the `Move` or `Deal` that completed its run.

use crate::board::{Board, PileId};
use crate::core::action::{Action, ActionLog};

/// Try to move the run starting at (`from`, `start`) onto `to`.
///
/// Validates the run and the destination; on rejection nothing mutates and
/// the result is `false`. On success the run transfers, a `Move` is logged,
/// and a run completed on the destination retires immediately. A completed
/// run consumes the entire eligible top block, so at most one retirement can
/// follow a single move.
pub fn attempt_move(
    board: &mut Board,
    log: &mut ActionLog,
    from: PileId,
    start: usize,
    to: PileId,
) -> bool {
    let Some(run) = board.piles[from.index()].movable_run_at(&board.cards, start) else {
        return false;
    };
    if !board.piles[to.index()].accepts_run(&board.cards, run[0]) {
        return false;
    }

    let (cards, origin_ys, revealed_below) = board.piles[from.index()]
        .take_from(&mut board.cards, start)
        .expect("run start validated above");
    board.piles[to.index()].push_run(&cards);
    log.record(Action::Move {
        cards,
        from,
        to,
        origin_ys,
        revealed_below,
    });

    retire_if_complete(board, log, to);
    true
}

/// Deal one card from the stock onto every pile.
///
/// Returns `false` with no mutation when the stock is exhausted. On success
/// a `Deal` is logged, then every pile is checked in ascending index order
/// and any completed run retires, each with its own `Retire` record.
pub fn deal_from_stock(board: &mut Board, log: &mut ActionLog) -> bool {
    let Some(dealt) = board
        .stock
        .deal_one_to_each(&mut board.cards, &mut board.piles)
    else {
        return false;
    };
    log.record(Action::Deal { dealt });

    for pile in PileId::all(board.piles.len()) {
        retire_if_complete(board, log, pile);
    }
    true
}

/// Retire a completed run from `pile`, if present.
fn retire_if_complete(board: &mut Board, log: &mut ActionLog, pile: PileId) -> bool {
    let Some((cards, origin_ys, revealed_below)) =
        board.piles[pile.index()].take_completed_run(&mut board.cards)
    else {
        return false;
    };
    board.foundation.push_run(cards.clone());
    log.record(Action::Retire {
        cards,
        from: pile,
        origin_ys,
        revealed_below,
    });
    true
}
