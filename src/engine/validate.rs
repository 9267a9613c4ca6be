//! Whole-guess validation.
//!
//! Rules are checked in a fixed order and the first failure is reported, so
//! a rejected attempt always produces exactly one message:
//! 1. completeness (four non-empty symbols)
//! 2. digit range (`'1'..='9'`)
//! 3. uniqueness

use thiserror::Error;

use crate::core::{Digit, DigitSet, Guess, CODE_LENGTH};

/// Placeholder symbol for an empty slot in textual input.
pub const EMPTY_SLOT: char = '_';

/// Why a candidate guess was rejected.
///
/// The display text is the hint shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Enter all four digits.")]
    IncompleteGuess,

    #[error("Use digits 1–9 (no zero).")]
    InvalidDigit,

    #[error("All digits must be unique.")]
    DuplicateDigit,
}

/// Validate a guess typed as text.
///
/// Every character is one symbol; `_` marks an empty slot.
///
/// ```
/// use formula4::engine::{validate, ValidationError};
///
/// assert_eq!(validate("12").unwrap_err(), ValidationError::IncompleteGuess);
/// assert_eq!(validate("1203").unwrap_err(), ValidationError::InvalidDigit);
/// assert_eq!(validate("1123").unwrap_err(), ValidationError::DuplicateDigit);
/// assert_eq!(validate("1234").unwrap().to_string(), "1234");
/// ```
pub fn validate(raw: &str) -> Result<Guess, ValidationError> {
    let symbols: Vec<Option<char>> = raw
        .chars()
        .map(|c| (c != EMPTY_SLOT).then_some(c))
        .collect();
    validate_slots(&symbols)
}

/// Validate the raw contents of the segmented input, one symbol per slot.
pub fn validate_slots(slots: &[Option<char>]) -> Result<Guess, ValidationError> {
    if slots.len() != CODE_LENGTH || slots.iter().any(Option::is_none) {
        return Err(ValidationError::IncompleteGuess);
    }

    let mut digits = [Digit::ONE; CODE_LENGTH];
    for (slot, out) in slots.iter().zip(digits.iter_mut()) {
        let symbol = slot.ok_or(ValidationError::IncompleteGuess)?;
        *out = Digit::from_char(symbol).ok_or(ValidationError::InvalidDigit)?;
    }

    let mut seen = DigitSet::new();
    if !digits.iter().all(|&d| seen.insert(d)) {
        return Err(ValidationError::DuplicateDigit);
    }

    Ok(Guess::from_digits(digits))
}
