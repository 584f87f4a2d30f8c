//! The 5x5 board: placement, removal, and victory evaluation.

pub mod grid;
pub mod victory;

pub use grid::Board;
pub use victory::{Victory, WinReason};
