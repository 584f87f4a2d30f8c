//! Board grid and placement.
//!
//! ## Invariants
//!
//! - Every cell holds exactly one `PieceKind`; `Empty` is an occupant, not
//!   absence.
//! - Exactly one Tok is on the board at all times.
//!
//! The board is mutated only through `place` and `remove`. A move is
//! remove-then-place with a freshly built value, so no two cells ever
//! alias the same piece.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Square, BOARD_SIZE};
use crate::piece::{Piece, PieceKind};

/// The 5x5 game board.
///
/// Initial layout: Player 1's five pieces fill row 0, Player 2's fill
/// row 4, the Tok stands at the center (2, 2), everything else is empty.
///
/// ```
/// use tok_engine::{Board, PieceKind, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::new(2, 2).unwrap()), PieceKind::Tok);
/// assert_eq!(board.piece_at(Square::new(0, 3).unwrap()), PieceKind::Player1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[PieceKind; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board in the starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[PieceKind::Empty; BOARD_SIZE]; BOARD_SIZE];
        for col in 0..BOARD_SIZE {
            cells[0][col] = PieceKind::Player1;
            cells[BOARD_SIZE - 1][col] = PieceKind::Player2;
        }
        cells[BOARD_SIZE / 2][BOARD_SIZE / 2] = PieceKind::Tok;

        Self { cells }
    }

    /// The occupant of a cell.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> PieceKind {
        self.cells[square.row()][square.col()]
    }

    /// The occupant of a cell as a `Piece` value.
    #[must_use]
    pub fn piece(&self, square: Square) -> Piece {
        Piece::new(square, self.piece_at(square))
    }

    /// Overwrite a cell with `kind`, replacing whatever was there.
    pub fn place(&mut self, square: Square, kind: PieceKind) {
        self.cells[square.row()][square.col()] = kind;
    }

    /// Empty a cell.
    pub fn remove(&mut self, square: Square) {
        self.place(square, PieceKind::Empty);
    }

    /// Where the Tok currently stands.
    #[must_use]
    pub fn tok_square(&self) -> Square {
        Square::all()
            .find(|&square| self.piece_at(square).is_tok())
            .expect("the board always holds exactly one Tok")
    }

    /// On-board neighbors of `square` that are currently empty.
    #[must_use]
    pub fn empty_neighbors(&self, square: Square) -> SmallVec<[Square; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| square.neighbor(direction))
            .filter(|&neighbor| self.piece_at(neighbor).is_empty())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for kind in row {
                write!(f, "{} ", kind.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
