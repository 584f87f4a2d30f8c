//! Pieces and the sliding-move algorithm.
//!
//! Every cell of the board holds exactly one `PieceKind` at all times;
//! `Empty` is an occupant kind, not absence. A `Piece` is a `Copy` value of
//! square plus kind, re-created on every placement; a move replaces board
//! cells rather than mutating a shared object.

pub mod kind;
pub mod slide;

pub use kind::PieceKind;
pub use slide::Piece;
