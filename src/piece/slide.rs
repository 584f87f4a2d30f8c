//! The sliding-move algorithm.
//!
//! A slide moves a piece cell by cell in one direction until the next cell
//! is off-board or occupied. The whole slide is atomic from the caller's
//! view: either the piece ends up at the furthest free cell, or the call
//! fails before anything moved.
//!
//! Hitting an obstacle is only an error on the *first* step. After at least
//! one step, the same obstacle just ends the slide: a successful partial
//! move. The two outcomes are kept apart explicitly: `StepOutcome` for the
//! normal continue/stop decision, `GameError` for genuine failures.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Direction, Square};
use crate::error::GameError;
use crate::turn::{MovePhase, Turn};

use super::kind::PieceKind;

/// A board occupant: a square plus what stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    square: Square,
    kind: PieceKind,
}

/// What a single slide step decided.
enum StepOutcome {
    /// The next cell is free; the piece advances onto it.
    Advance(Square),
    /// The slide ends here (wall or piece ahead, after at least one step).
    Stop,
}

impl Piece {
    #[must_use]
    pub const fn new(square: Square, kind: PieceKind) -> Self {
        Self { square, kind }
    }

    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Slide this piece as far as it can go in `direction`.
    ///
    /// Checked in order, each a distinct failure:
    /// 1. The selected cell must not be empty.
    /// 2. The piece must match the phase: a regular piece during the
    ///    Regular phase, the Tok during the Tok phase.
    /// 3. An owned piece must belong to the active player. The Tok has no
    ///    owner and is exempt.
    /// 4. The first step must be possible: `BoardEdge` if it would leave
    ///    the board, `Obstructed` if another piece is directly adjacent.
    ///
    /// On success the piece has moved to the returned square and every cell
    /// it passed over is empty. On failure the board is untouched.
    pub fn attempt_slide(
        &self,
        board: &mut Board,
        direction: Direction,
        turn: &Turn,
    ) -> Result<Square, GameError> {
        if self.kind.is_empty() {
            return Err(GameError::InvalidSelection);
        }

        let phase = turn.phase();
        let phase_mismatch = match phase {
            MovePhase::Regular => self.kind.is_tok(),
            MovePhase::Tok => !self.kind.is_tok(),
        };
        if phase_mismatch {
            return Err(GameError::WrongPieceForPhase { required: phase });
        }

        if let Some(owner) = self.kind.owner() {
            if owner != turn.active_player() {
                return Err(GameError::WrongPlayerTurn {
                    active: turn.active_player(),
                });
            }
        }

        let mut at = self.square;
        let mut first_step = true;
        loop {
            // Errors only surface on the first step, before any mutation,
            // so a failed slide never leaves a half-moved board.
            match step(board, at, direction, first_step)? {
                StepOutcome::Advance(next) => {
                    board.remove(at);
                    board.place(next, self.kind);
                    at = next;
                    first_step = false;
                }
                StepOutcome::Stop => break,
            }
        }

        Ok(at)
    }
}

/// Decide one step of a slide.
fn step(
    board: &Board,
    from: Square,
    direction: Direction,
    first_step: bool,
) -> Result<StepOutcome, GameError> {
    let Some(next) = from.neighbor(direction) else {
        return if first_step {
            Err(GameError::BoardEdge(direction))
        } else {
            Ok(StepOutcome::Stop)
        };
    };

    if board.piece_at(next).is_empty() {
        Ok(StepOutcome::Advance(next))
    } else if first_step {
        Err(GameError::Obstructed(direction))
    } else {
        Ok(StepOutcome::Stop)
    }
}
