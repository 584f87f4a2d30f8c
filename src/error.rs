//! Error taxonomy for move attempts.
//!
//! Every failure is user-facing and recoverable: it terminates the current
//! move attempt, leaves board and turn state untouched, and carries a short
//! message for the view to display. The engine has no I/O, so there is no
//! fatal error class.

use thiserror::Error;

use crate::core::{Direction, Player};
use crate::turn::MovePhase;

/// A rejected command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// An empty cell was asked to move.
    #[error("select a valid position")]
    InvalidSelection,

    /// A slide was attempted with nothing selected.
    #[error("no piece is selected")]
    NoSelection,

    /// The selected piece does not match the current move phase.
    #[error("{}", .required.requirement())]
    WrongPieceForPhase { required: MovePhase },

    /// The selected piece belongs to the player not on move.
    #[error("it is {active}'s turn")]
    WrongPlayerTurn { active: Player },

    /// The first slide step would leave the board.
    #[error("the board wall blocks sliding {0}")]
    BoardEdge(Direction),

    /// The first slide step is blocked by another piece.
    #[error("another piece blocks sliding {0}")]
    Obstructed(Direction),

    /// A coordinate outside the 5x5 grid.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// A command was issued after the game ended.
    #[error("the game is already over")]
    GameOver,
}
