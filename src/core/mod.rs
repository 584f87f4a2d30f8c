//! Core value types: players, squares, directions.
//!
//! These are the small `Copy` values the rest of the engine composes.
//! None of them hold game state; they only name things on the board.

pub mod direction;
pub mod player;
pub mod square;

pub use direction::Direction;
pub use player::Player;
pub use square::{Square, BOARD_SIZE};
