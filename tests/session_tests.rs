//! Session-level integration tests.
//!
//! These drive the public API the way an input layer would: resolved
//! (pile, position) clicks, deck clicks, and undo presses.

use spider_core::{
    Card, GameSession, PileId, SelectOutcome, SuitCount, DECK_SIZE, PILE_COUNT,
};

// =============================================================================
// Helpers
// =============================================================================

/// Everything the renderer could observe, for exact-state comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    piles: Vec<Vec<(Card, i32)>>,
    stock_size: usize,
    foundation_runs: usize,
}

fn snapshot(session: &GameSession) -> Snapshot {
    let piles = PileId::all(PILE_COUNT)
        .map(|id| {
            let pile = session.pile(id);
            pile.cards()
                .iter()
                .enumerate()
                .map(|(i, &card)| (*session.card(card), pile.offset_at(i).unwrap()))
                .collect()
        })
        .collect();
    Snapshot {
        piles,
        stock_size: session.stock_size(),
        foundation_runs: session.foundation_runs(),
    }
}

fn total_cards(session: &GameSession) -> usize {
    let in_piles: usize = PileId::all(PILE_COUNT)
        .map(|id| session.pile(id).len())
        .sum();
    in_piles + session.stock_size() + session.foundation_runs() * 13
}

/// Check that no face-down card sits above a face-up one in any pile.
fn assert_orientation_invariant(session: &GameSession) {
    for id in PileId::all(PILE_COUNT) {
        let pile = session.pile(id);
        let mut seen_face_up = false;
        for &card in pile.cards() {
            let face_up = session.card(card).face_up;
            assert!(
                !(seen_face_up && !face_up),
                "face-down card above a face-up one in {id}"
            );
            seen_face_up |= face_up;
        }
    }
}

/// Find one legal move by scanning piles the way a player scans the table:
/// for every run start, the first destination that accepts it.
fn find_legal_move(session: &GameSession) -> Option<(PileId, usize, PileId)> {
    for from in PileId::all(PILE_COUNT) {
        let pile = session.pile(from);
        for start in (0..pile.len()).rev() {
            // Rebuild run validity from the outside, using only public state.
            let block = &pile.cards()[start..];
            let all_up = block.iter().all(|&c| session.card(c).face_up);
            let contiguous = block.windows(2).all(|pair| {
                let lower = session.card(pair[0]);
                let upper = session.card(pair[1]);
                lower.suit == upper.suit && upper.rank + 1 == lower.rank
            });
            if !all_up || !contiguous {
                break;
            }
            let bottom = session.card(block[0]).rank;
            for to in PileId::all(PILE_COUNT) {
                if to == from {
                    continue;
                }
                let dest = session.pile(to);
                let accepts = match dest.cards().last() {
                    None => true,
                    Some(&top) => bottom < session.card(top).rank,
                };
                if accepts {
                    return Some((from, start, to));
                }
            }
        }
    }
    None
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_initial_deal_shape() {
    let session = GameSession::new(SuitCount::Two, 42);

    for (index, id) in PileId::all(PILE_COUNT).enumerate() {
        let pile = session.pile(id);
        let expected = if index < 4 { 6 } else { 5 };
        assert_eq!(pile.len(), expected);

        for (row, &card) in pile.cards().iter().enumerate() {
            assert_eq!(session.card(card).face_up, row == pile.len() - 1);
        }
    }
    assert_eq!(session.stock_size(), 50);
    assert_eq!(session.deals_remaining(), 5);
    assert_eq!(total_cards(&session), DECK_SIZE);
    assert!(!session.is_won());
    assert!(!session.any_pile_empty());
}

#[test]
fn test_all_suit_counts_deal_104() {
    for suit_count in [SuitCount::One, SuitCount::Two, SuitCount::Four] {
        let session = GameSession::new(suit_count, 7);
        assert_eq!(total_cards(&session), DECK_SIZE);
    }
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_stock_exhaustion() {
    let mut session = GameSession::new(SuitCount::One, 42);

    // Five full deals empty the 50-card stock.
    for deal in 0..5 {
        assert_eq!(session.stock_size(), 50 - deal * 10);
        assert!(session.draw_from_stock());
        assert_orientation_invariant(&session);
    }
    assert_eq!(session.stock_size(), 0);

    // A sixth deal is a rejected no-op.
    let before = snapshot(&session);
    assert!(!session.draw_from_stock());
    assert_eq!(snapshot(&session), before);
}

#[test]
fn test_deal_adds_one_face_up_card_per_pile() {
    let mut session = GameSession::new(SuitCount::Two, 11);
    let before: Vec<_> = PileId::all(PILE_COUNT)
        .map(|id| session.pile(id).len())
        .collect();

    assert!(session.draw_from_stock());

    for (i, id) in PileId::all(PILE_COUNT).enumerate() {
        let pile = session.pile(id);
        assert_eq!(pile.len(), before[i] + 1);
        let top = *pile.cards().last().unwrap();
        assert!(session.card(top).face_up);
    }
    assert_eq!(total_cards(&session), DECK_SIZE);
}

// =============================================================================
// Moving
// =============================================================================

#[test]
fn test_scanned_moves_keep_invariants() {
    let mut session = GameSession::new(SuitCount::One, 3);

    let mut played = 0;
    while played < 20 {
        match find_legal_move(&session) {
            Some((from, start, to)) => {
                assert_eq!(session.select_at(from, start), SelectOutcome::Selected);
                assert_eq!(session.select_at(to, 0), SelectOutcome::Moved);
                played += 1;
            }
            None => {
                if !session.draw_from_stock() {
                    break;
                }
            }
        }
        assert_eq!(total_cards(&session), DECK_SIZE);
        assert_orientation_invariant(&session);
    }
    assert!(played > 0, "a full game with no legal move at all");
}

/// A legal move, dealing more rows until one appears.
fn find_legal_move_dealing(session: &mut GameSession) -> (PileId, usize, PileId) {
    loop {
        if let Some(found) = find_legal_move(session) {
            return found;
        }
        assert!(session.draw_from_stock(), "no legal move in the whole game");
    }
}

#[test]
fn test_selection_survives_only_until_second_click() {
    let mut session = GameSession::new(SuitCount::One, 3);
    let (from, start, to) = find_legal_move_dealing(&mut session);

    assert_eq!(session.select_at(from, start), SelectOutcome::Selected);
    assert!(session.pending_selection().is_some());

    assert_eq!(session.select_at(to, 0), SelectOutcome::Moved);
    assert!(session.pending_selection().is_none());
}

// =============================================================================
// Undo round-trips
// =============================================================================

#[test]
fn test_undo_restores_initial_state() {
    let mut session = GameSession::new(SuitCount::One, 3);
    let initial = snapshot(&session);

    // A mixed sequence: moves where possible, deals otherwise.
    for _ in 0..30 {
        if let Some((from, start, to)) = find_legal_move(&session) {
            session.select_at(from, start);
            session.select_at(to, 0);
        } else if !session.draw_from_stock() {
            break;
        }
    }
    assert_ne!(snapshot(&session), initial);

    while session.undo() {}

    assert_eq!(session.action_count(), 0);
    assert_eq!(snapshot(&session), initial);
}

#[test]
fn test_undo_on_fresh_session_is_rejected() {
    let mut session = GameSession::new(SuitCount::Two, 42);
    let before = snapshot(&session);

    assert!(!session.undo());
    assert_eq!(snapshot(&session), before);
}

#[test]
fn test_undo_single_deal() {
    let mut session = GameSession::new(SuitCount::Two, 42);
    let before = snapshot(&session);

    assert!(session.draw_from_stock());
    assert!(session.undo());

    assert_eq!(snapshot(&session), before);
}
