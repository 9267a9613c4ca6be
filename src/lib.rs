//! # formula4
//!
//! Engine for "Formula 4", a Bulls and Cows style number-guessing game.
//!
//! The program hides a secret of four distinct digits from 1-9. Each guess
//! is scored with two numbers: how many of its digits appear anywhere in the
//! secret, and how many sit in the right position. Four in the right
//! position wins.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: validation, duplicate detection and scoring are pure
//!    functions over explicit inputs.
//!
//! 2. **Owned sessions**: all mutable state lives in a `GameState` value.
//!    No globals, so sessions are independent and easy to test.
//!
//! 3. **Injected randomness**: secrets come from a seedable, checkpointable
//!    `GameRng` owned by the session.
//!
//! 4. **Configuration over forks**: presentation differences (history
//!    order, backspace behavior, input lock on win) are `GameConfig` options.
//!
//! ## Modules
//!
//! - `core`: digits, secrets and guesses, RNG, configuration
//! - `engine`: validation, duplicate detection, scoring
//! - `secret`: secret generation
//! - `game`: sessions, history, hint messages
//! - `input`: the segmented four-slot input
//!
//! ## Example
//!
//! ```
//! use formula4::{GameConfig, GameState, GameStatus};
//!
//! let mut game = GameState::new_game(GameConfig::default().with_seed(7));
//! let entry = game.submit_guess("1234").unwrap();
//! assert!(entry.positions_correct <= entry.digits_correct);
//!
//! game.reset();
//! assert_eq!(game.status(), GameStatus::Open);
//! assert!(game.history().is_empty());
//! ```

pub mod core;
pub mod engine;
pub mod secret;
pub mod game;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    Digit, DigitSet, CODE_LENGTH,
    Guess, PartialGuess, Secret,
    GameRng, GameRngState,
    BackspacePolicy, GameConfig, HistoryOrder, SecretStrategy,
};

pub use crate::engine::{score, validate, validate_slots, would_duplicate, ScoreResult, ValidationError};

pub use crate::secret::SecretGenerator;

pub use crate::game::{GameState, GameStatus, Hint, History, HistoryEntry, SubmitError};

pub use crate::input::{DigitInput, InputOutcome};
