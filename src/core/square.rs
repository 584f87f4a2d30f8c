//! Board coordinates.
//!
//! ## Square
//!
//! A validated (row, column) pair. A `Square` that exists is always inside
//! the 5x5 board, so grid access through one never needs a bounds check.
//! Out-of-range coordinates are rejected at construction with
//! `GameError::OutOfBounds`.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::error::GameError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// A cell coordinate on the board.
///
/// Row 0 is the top edge (Player 1's home row), row 4 the bottom edge
/// (Player 2's home row).
///
/// ```
/// use tok_engine::Square;
///
/// let sq = Square::new(2, 2).unwrap();
/// assert_eq!(sq.row(), 2);
/// assert!(Square::new(5, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, rejecting out-of-range coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Construct from coordinates the caller already knows are in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index, 0-based from the top.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index, 0-based from the left.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The adjacent square one step in `direction`, or `None` at the edge.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Square> {
        let (dr, dc) = direction.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        let limit = BOARD_SIZE as i8;

        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over every square on the board, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
