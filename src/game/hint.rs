//! Player-facing hint messages.
//!
//! Every player action ends in at most one hint. The presentation layer
//! decides how to show it; `is_error` tells it whether to style it as one.

use crate::engine::{ScoreResult, ValidationError};

use super::state::SubmitError;

/// One message for the hint line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    /// A submitted guess failed validation.
    Rejected(ValidationError),
    /// A typed digit is already in another slot.
    RepeatedDigit,
    /// Keypad pressed with every slot filled.
    InputFull,
    /// A guess was scored and the game goes on.
    Scored(ScoreResult),
    /// The secret was cracked.
    Won,
    /// A guess was submitted after the win.
    AlreadyWon,
    /// The game was reset.
    NewRound,
}

impl Hint {
    /// Hint for a scored guess: `Won` on a full match, `Scored` otherwise.
    #[must_use]
    pub fn for_score(score: ScoreResult) -> Self {
        if score.is_win() {
            Hint::Won
        } else {
            Hint::Scored(score)
        }
    }

    /// Check whether this hint reports a rejected action.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Hint::Rejected(_) | Hint::RepeatedDigit | Hint::AlreadyWon)
    }
}

impl From<SubmitError> for Hint {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Invalid(e) => Hint::Rejected(e),
            SubmitError::AlreadyWon => Hint::AlreadyWon,
        }
    }
}

fn plural(n: u8) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Rejected(error) => write!(f, "{error}"),
            Hint::RepeatedDigit => write!(f, "No repeating digits."),
            Hint::InputFull => write!(f, "All four filled. Press Enter."),
            Hint::Scored(score) => write!(
                f,
                "{} correct digit{}, {} in correct position{}.",
                score.digits_correct,
                plural(score.digits_correct),
                score.positions_correct,
                plural(score.positions_correct),
            ),
            Hint::Won => write!(f, "You cracked it! Press Reset to play again."),
            Hint::AlreadyWon => write!(f, "{}", SubmitError::AlreadyWon),
            Hint::NewRound => write!(f, "New round started."),
        }
    }
}
