//! # tok-engine
//!
//! Rule engine for **Jogo do Tok**, a two-player abstract strategy game on
//! a 5x5 board. Each player starts with five pieces on their home row; the
//! shared Tok starts at the center. A move slides a piece in a straight
//! line until it hits a wall or another piece. Each round the active
//! player slides one of their own pieces, then slides the Tok. The game
//! ends when the Tok reaches an edge home row or is boxed in.
//!
//! ## Design Principles
//!
//! 1. **Pure state, no view**: the engine is plain in-memory data plus
//!    commands. A presentation layer renders from the current state and
//!    forwards move intents; none of that lives here.
//!
//! 2. **Value semantics**: pieces are `Copy` values re-created on every
//!    placement. A move replaces board cells instead of mutating a shared
//!    object graph.
//!
//! 3. **Typed failures**: every rejected command is a `GameError` variant
//!    with a short user-facing message, and leaves all state unchanged.
//!
//! ## Quick Start
//!
//! ```
//! use tok_engine::{Direction, GameSession, MovePhase, Player};
//!
//! let mut session = GameSession::new();
//!
//! // Player 2 opens: slide the piece at (4, 0) upwards. It stops below
//! // Player 1's back row, at (1, 0).
//! session.select(4, 0).unwrap();
//! let outcome = session.slide_selected(Direction::Up).unwrap();
//! assert_eq!(outcome.destination.row(), 1);
//!
//! // Same player must now move the Tok.
//! assert_eq!(session.turn().phase(), MovePhase::Tok);
//! assert_eq!(session.turn().active_player(), Player::Two);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, squares, directions
//! - `piece`: piece kinds and the sliding-move algorithm
//! - `board`: the 5x5 grid and victory evaluation
//! - `turn`: phase/round state machine
//! - `session`: the command/query surface for a view layer
//! - `error`: the failure taxonomy

pub mod board;
pub mod core;
pub mod error;
pub mod piece;
pub mod session;
pub mod turn;

// Re-export the public surface
pub use crate::board::{Board, Victory, WinReason};
pub use crate::core::{Direction, Player, Square, BOARD_SIZE};
pub use crate::error::GameError;
pub use crate::piece::{Piece, PieceKind};
pub use crate::session::{GameSession, SlideOutcome};
pub use crate::turn::{MovePhase, Turn};
