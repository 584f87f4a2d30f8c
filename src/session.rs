//! Game session: the surface the presentation layer talks to.
//!
//! ## Commands
//!
//! - `select(row, col)`: record which cell the user picked. Pure
//!   selection: nothing else changes.
//! - `slide_selected(direction)`: attempt the move. On success the slide
//!   is applied, victory is evaluated, and the turn phase advances, in
//!   that order. On failure board, turn, and outcome are unchanged.
//!
//! ## Queries
//!
//! Current board contents, turn state, selection, and outcome. The view
//! re-renders declaratively from these; the engine pushes nothing.
//!
//! One session is one game. Processing is synchronous: each command runs
//! to completion before the next is accepted. A restart constructs a
//! fresh session rather than resetting this one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Victory};
use crate::core::{Direction, Square};
use crate::error::GameError;
use crate::piece::Piece;
use crate::turn::{MovePhase, Turn};

/// A running (or finished) game.
///
/// ```
/// use tok_engine::{Direction, GameSession};
///
/// let mut session = GameSession::new();
/// session.select(4, 0).unwrap();
/// let outcome = session.slide_selected(Direction::Up).unwrap();
/// assert_eq!(outcome.destination.row(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: Turn,
    selected: Option<Square>,
    outcome: Option<Victory>,
}

/// What a successful slide produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Where the piece came to rest.
    pub destination: Square,
    /// Set when this move ended the game.
    pub victory: Option<Victory>,
}

impl GameSession {
    /// A fresh game in the starting position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::new(),
            selected: None,
            outcome: None,
        }
    }

    /// Current board contents.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn state.
    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// The piece last selected, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Piece> {
        self.selected.map(|square| self.board.piece(square))
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<&Victory> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Select the piece at (row, col).
    ///
    /// Selection never mutates board or turn state; selecting a different
    /// cell simply replaces the previous selection. Empty cells can be
    /// selected; the mistake is reported when a slide is attempted.
    pub fn select(&mut self, row: usize, col: usize) -> Result<Piece, GameError> {
        let square = Square::new(row, col)?;
        self.selected = Some(square);

        let piece = self.board.piece(square);
        debug!(%square, kind = ?piece.kind(), "piece selected");
        Ok(piece)
    }

    /// Slide the selected piece in `direction`.
    ///
    /// On success the selection is cleared and the turn advances: to the
    /// Tok phase after a Regular move, to the opponent's round after a Tok
    /// move. Victory is evaluated between the slide and the advance; a
    /// decided game rejects all further slides with `GameError::GameOver`.
    pub fn slide_selected(&mut self, direction: Direction) -> Result<SlideOutcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        let square = self.selected.ok_or(GameError::NoSelection)?;

        let piece = self.board.piece(square);
        let destination = piece.attempt_slide(&mut self.board, direction, &self.turn)?;
        self.selected = None;

        let victory = self.board.evaluate_victory(&self.turn);
        self.outcome = victory;

        match self.turn.phase() {
            MovePhase::Regular => self.turn.advance_half_round(),
            MovePhase::Tok => self.turn.advance_round(),
        }

        debug!(from = %square, to = %destination, %direction, over = victory.is_some(), "slide completed");
        Ok(SlideOutcome {
            destination,
            victory,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
