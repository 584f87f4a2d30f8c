//! Victory evaluation.
//!
//! Two ways to win:
//! - The Tok stands on an edge home row: row 0 awards the game to
//!   Player 1, row 4 to Player 2. The row decides the winner regardless of
//!   who pushed the Tok there.
//! - The Tok has no empty on-board neighbor and can never be moved again.
//!   Whoever is on move when this is detected wins.
//!
//! The check runs after every completed slide, before the phase advances.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Square, BOARD_SIZE};
use crate::turn::Turn;

use super::grid::Board;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The Tok reached the winner's goal row.
    ReachedGoalRow,
    /// The Tok was boxed in with the opponent on move.
    OpponentImmobilized,
}

/// A decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Player,
    pub reason: WinReason,
}

impl Board {
    /// Check whether the game is over.
    ///
    /// Returns `None` while play continues. The goal-row rule is checked
    /// first; only if the Tok is elsewhere is immobilization considered.
    #[must_use]
    pub fn evaluate_victory(&self, turn: &Turn) -> Option<Victory> {
        if let Some(winner) = self.tok_home_row_winner() {
            return Some(Victory {
                winner,
                reason: WinReason::ReachedGoalRow,
            });
        }

        if self.empty_neighbors(self.tok_square()).is_empty() {
            return Some(Victory {
                winner: turn.active_player(),
                reason: WinReason::OpponentImmobilized,
            });
        }

        None
    }

    /// The player whose home row the Tok stands on, if either.
    fn tok_home_row_winner(&self) -> Option<Player> {
        [Player::One, Player::Two].into_iter().find(|player| {
            let row = player.home_row();
            (0..BOARD_SIZE).any(|col| {
                self.piece_at(Square::at(row as u8, col as u8)).is_tok()
            })
        })
    }
}
