//! Piece kinds.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// What occupies a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// An unoccupied cell.
    Empty,
    /// One of Player 1's ordinary pieces.
    Player1,
    /// One of Player 2's ordinary pieces.
    Player2,
    /// The shared Tok. It has no owner; both players move it in turn.
    Tok,
}

impl PieceKind {
    /// The player who owns this piece, if any.
    ///
    /// The Tok and empty cells belong to nobody.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            PieceKind::Player1 => Some(Player::One),
            PieceKind::Player2 => Some(Player::Two),
            PieceKind::Empty | PieceKind::Tok => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    #[must_use]
    pub const fn is_tok(self) -> bool {
        matches!(self, PieceKind::Tok)
    }

    /// An ordinary player-owned piece.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        matches!(self, PieceKind::Player1 | PieceKind::Player2)
    }

    /// One-character label for rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::Player1 => '1',
            PieceKind::Player2 => '2',
            PieceKind::Tok => 'T',
        }
    }
}
