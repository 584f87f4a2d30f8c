//! Player identification.
//!
//! Exactly two players. Each owns the row of pieces that starts on their
//! home row: Player 1 on row 0, Player 2 on row 4. The Tok belongs to
//! neither player.

use serde::{Deserialize, Serialize};

use super::square::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player's pieces start on.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
