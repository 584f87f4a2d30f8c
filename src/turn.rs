//! Turn sequencing: phases and rounds.
//!
//! A round is one Regular-piece slide by the active player followed by one
//! Tok slide. The phase alternates strictly between `Regular` and `Tok`;
//! the active player only changes when a Tok move closes the round.
//!
//! `Turn` has no terminal state of its own. The session treats a victory
//! verdict as terminal and stops issuing moves.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Which kind of piece must be moved in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovePhase {
    /// The active player must move one of their own ordinary pieces.
    Regular,
    /// The Tok must be moved.
    Tok,
}

impl MovePhase {
    /// User-facing statement of what this phase requires.
    #[must_use]
    pub const fn requirement(self) -> &'static str {
        match self {
            MovePhase::Regular => "you must move a regular piece",
            MovePhase::Tok => "you must move the Tok",
        }
    }
}

/// The turn state machine: step counter, active player, required phase.
///
/// ```
/// use tok_engine::{MovePhase, Player, Turn};
///
/// let mut turn = Turn::new();
/// assert_eq!(turn.active_player(), Player::Two);
/// assert_eq!(turn.phase(), MovePhase::Regular);
///
/// turn.advance_half_round();
/// assert_eq!(turn.phase(), MovePhase::Tok);
/// assert_eq!(turn.active_player(), Player::Two);
///
/// turn.advance_round();
/// assert_eq!(turn.active_player(), Player::One);
/// assert_eq!(turn.step(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    step: u32,
    active: Player,
    phase: MovePhase,
}

impl Turn {
    /// Start-of-game turn state: Player 2 moves a regular piece first.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: 0,
            active: Player::Two,
            phase: MovePhase::Regular,
        }
    }

    /// Number of completed rounds.
    #[must_use]
    pub const fn step(&self) -> u32 {
        self.step
    }

    /// The player on move.
    #[must_use]
    pub const fn active_player(&self) -> Player {
        self.active
    }

    /// The kind of piece that must move now.
    #[must_use]
    pub const fn phase(&self) -> MovePhase {
        self.phase
    }

    /// Advance past a completed Regular-piece move.
    ///
    /// The same player goes on to move the Tok; step is unchanged.
    pub fn advance_half_round(&mut self) {
        self.phase = MovePhase::Tok;
    }

    /// Advance past a completed Tok move, closing the round.
    ///
    /// The opposing player opens the next round with a Regular-piece move.
    pub fn advance_round(&mut self) {
        self.step += 1;
        self.active = self.active.opponent();
        self.phase = MovePhase::Regular;
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}
