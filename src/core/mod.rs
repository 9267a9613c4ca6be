//! Core types: digits, codes, RNG, configuration.
//!
//! Everything here is plain data. The engine and the session build on these
//! types; none of them hold global state.

pub mod digit;
pub mod code;
pub mod rng;
pub mod config;

pub use digit::{all_unique, Digit, DigitSet, CODE_LENGTH};
pub use code::{Guess, PartialGuess, Secret};
pub use rng::{GameRng, GameRngState};
pub use config::{BackspacePolicy, GameConfig, HistoryOrder, SecretStrategy};
