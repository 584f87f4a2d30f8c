//! End-to-end session tests.
//!
//! These drive the engine exactly the way a view layer would: select a
//! cell, ask for a slide, read back board and turn state.

use tok_engine::{
    Direction, GameError, GameSession, MovePhase, PieceKind, Player, Square, WinReason,
};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn kind_at(session: &GameSession, row: usize, col: usize) -> PieceKind {
    session.board().piece_at(sq(row, col))
}

// =============================================================================
// Opening position
// =============================================================================

#[test]
fn test_opening_position() {
    let session = GameSession::new();

    for col in 0..5 {
        assert_eq!(kind_at(&session, 0, col), PieceKind::Player1);
        assert_eq!(kind_at(&session, 4, col), PieceKind::Player2);
    }
    assert_eq!(kind_at(&session, 2, 2), PieceKind::Tok);

    assert_eq!(session.turn().step(), 0);
    assert_eq!(session.turn().active_player(), Player::Two);
    assert_eq!(session.turn().phase(), MovePhase::Regular);
}

// =============================================================================
// Opening moves
// =============================================================================

/// Player 2's opening slide runs the length of the empty column and stops
/// below Player 1's back row.
#[test]
fn test_opening_slide_stops_below_back_row() {
    let mut session = GameSession::new();

    session.select(4, 0).unwrap();
    let outcome = session.slide_selected(Direction::Up).unwrap();

    assert_eq!(outcome.destination, sq(1, 0));
    assert_eq!(outcome.victory, None);
    assert_eq!(kind_at(&session, 1, 0), PieceKind::Player2);
    assert_eq!(kind_at(&session, 4, 0), PieceKind::Empty);

    // Same player stays on move, now obliged to slide the Tok.
    assert_eq!(session.turn().phase(), MovePhase::Tok);
    assert_eq!(session.turn().active_player(), Player::Two);
    assert_eq!(session.turn().step(), 0);
}

/// The Tok's slide up column 2 is stopped by Player 1's back row; the
/// round then closes and Player 1 takes over.
#[test]
fn test_tok_move_closes_the_round() {
    let mut session = GameSession::new();
    session.select(4, 0).unwrap();
    session.slide_selected(Direction::Up).unwrap();

    session.select(2, 2).unwrap();
    let outcome = session.slide_selected(Direction::Up).unwrap();

    assert_eq!(outcome.destination, sq(1, 2));
    assert_eq!(kind_at(&session, 1, 2), PieceKind::Tok);
    assert_eq!(kind_at(&session, 2, 2), PieceKind::Empty);

    assert_eq!(session.turn().phase(), MovePhase::Regular);
    assert_eq!(session.turn().active_player(), Player::One);
    assert_eq!(session.turn().step(), 1);
}

// =============================================================================
// Rejected moves
// =============================================================================

#[test]
fn test_selecting_empty_cell_fails_on_slide() {
    let mut session = GameSession::new();
    session.select(2, 0).unwrap();

    assert_eq!(
        session.slide_selected(Direction::Up),
        Err(GameError::InvalidSelection)
    );
}

#[test]
fn test_moving_opponents_piece_is_rejected() {
    let mut session = GameSession::new();
    let board_before = session.board().clone();
    let turn_before = *session.turn();

    session.select(0, 2).unwrap(); // Player 1's piece, Player 2 on move
    let err = session.slide_selected(Direction::Down);

    assert_eq!(
        err,
        Err(GameError::WrongPlayerTurn {
            active: Player::Two
        })
    );
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.turn(), &turn_before);
}

#[test]
fn test_tok_cannot_move_during_regular_phase() {
    let mut session = GameSession::new();
    session.select(2, 2).unwrap();

    assert_eq!(
        session.slide_selected(Direction::Left),
        Err(GameError::WrongPieceForPhase {
            required: MovePhase::Regular
        })
    );
}

#[test]
fn test_regular_piece_cannot_move_during_tok_phase() {
    let mut session = GameSession::new();
    session.select(4, 1).unwrap();
    session.slide_selected(Direction::Up).unwrap();

    session.select(4, 3).unwrap();
    assert_eq!(
        session.slide_selected(Direction::Up),
        Err(GameError::WrongPieceForPhase {
            required: MovePhase::Tok
        })
    );
}

#[test]
fn test_first_step_off_board_is_an_error() {
    let mut session = GameSession::new();
    session.select(4, 2).unwrap();

    assert_eq!(
        session.slide_selected(Direction::Down),
        Err(GameError::BoardEdge(Direction::Down))
    );
}

#[test]
fn test_first_step_into_neighbor_is_an_error() {
    let mut session = GameSession::new();
    session.select(4, 2).unwrap();

    assert_eq!(
        session.slide_selected(Direction::Right),
        Err(GameError::Obstructed(Direction::Right))
    );
}

// =============================================================================
// A full game
// =============================================================================

/// Script a complete game where the Tok is steered onto row 4.
///
/// The last slide is made by Player 1 (obliged to move the Tok), yet the
/// game goes to Player 2: the row the Tok lands on decides the winner, not
/// who pushed it.
#[test]
fn test_full_game_to_goal_row() {
    let mut session = GameSession::new();

    let script = [
        ((4, 2), Direction::Up, (3, 2)),    // P2 regular, stops below Tok
        ((2, 2), Direction::Right, (2, 4)), // P2 Tok, to the right wall
        ((0, 0), Direction::Down, (3, 0)),  // P1 regular
        ((2, 4), Direction::Down, (3, 4)),  // P1 Tok
        ((3, 2), Direction::Left, (3, 1)),  // P2 regular, vacates column 2
        ((3, 4), Direction::Left, (3, 2)),  // P2 Tok
        ((0, 1), Direction::Down, (2, 1)),  // P1 regular
    ];

    for ((row, col), direction, (dest_row, dest_col)) in script {
        session.select(row, col).unwrap();
        let outcome = session.slide_selected(direction).unwrap();
        assert_eq!(outcome.destination, sq(dest_row, dest_col));
        assert_eq!(outcome.victory, None);
        assert!(!session.is_over());
    }

    // Player 1 has no choice but to slide the Tok down into the open
    // column 2, landing it on row 4.
    session.select(3, 2).unwrap();
    let outcome = session.slide_selected(Direction::Down).unwrap();

    assert_eq!(outcome.destination, sq(4, 2));
    let victory = outcome.victory.expect("the game should be decided");
    assert_eq!(victory.winner, Player::Two);
    assert_eq!(victory.reason, WinReason::ReachedGoalRow);

    assert!(session.is_over());
    assert_eq!(session.outcome(), Some(&victory));
}

#[test]
fn test_no_moves_accepted_after_the_game_ends() {
    let mut session = GameSession::new();

    // Replay the scripted game above to a decided position.
    let script = [
        ((4, 2), Direction::Up),
        ((2, 2), Direction::Right),
        ((0, 0), Direction::Down),
        ((2, 4), Direction::Down),
        ((3, 2), Direction::Left),
        ((3, 4), Direction::Left),
        ((0, 1), Direction::Down),
        ((3, 2), Direction::Down),
    ];
    for ((row, col), direction) in script {
        session.select(row, col).unwrap();
        session.slide_selected(direction).unwrap();
    }
    assert!(session.is_over());

    let board_before = session.board().clone();
    session.select(4, 0).unwrap();
    assert_eq!(session.slide_selected(Direction::Up), Err(GameError::GameOver));
    assert_eq!(session.board(), &board_before);
}

// =============================================================================
// Restart semantics
// =============================================================================

/// A rematch is a fresh session, not a reset of the old one.
#[test]
fn test_fresh_session_is_a_clean_game() {
    let mut old = GameSession::new();
    old.select(4, 4).unwrap();
    old.slide_selected(Direction::Up).unwrap();

    let fresh = GameSession::new();
    assert_eq!(kind_at(&fresh, 4, 4), PieceKind::Player2);
    assert_eq!(fresh.turn().step(), 0);
    assert!(fresh.selected().is_none());
}
