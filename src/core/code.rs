//! Four-digit codes: the secret, a guess, and a guess still being typed.
//!
//! `Secret` and `Guess` share the same shape (four distinct digits) but are
//! distinct types so they can't be swapped when scoring. Both can only be
//! built through constructors that enforce uniqueness.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::digit::{all_unique, Digit, CODE_LENGTH};
use crate::engine::ValidationError;

macro_rules! code_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "[Digit; 4]", into = "[Digit; 4]")]
        pub struct $name([Digit; CODE_LENGTH]);

        impl $name {
            /// Create from four digits.
            ///
            /// # Panics
            ///
            /// Panics if any digit repeats.
            #[must_use]
            pub fn from_digits(digits: [Digit; CODE_LENGTH]) -> Self {
                assert!(
                    all_unique(&digits),
                    concat!(stringify!($name), " digits must be unique")
                );
                Self(digits)
            }

            /// The digits in position order.
            #[must_use]
            pub fn digits(&self) -> &[Digit; CODE_LENGTH] {
                &self.0
            }

            /// Iterate over the digits in position order.
            pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
                self.0.iter().copied()
            }

            /// Check whether a digit appears at any position.
            #[must_use]
            pub fn contains(&self, digit: Digit) -> bool {
                self.0.contains(&digit)
            }
        }

        impl TryFrom<[Digit; CODE_LENGTH]> for $name {
            type Error = ValidationError;

            fn try_from(digits: [Digit; CODE_LENGTH]) -> Result<Self, Self::Error> {
                if all_unique(&digits) {
                    Ok(Self(digits))
                } else {
                    Err(ValidationError::DuplicateDigit)
                }
            }
        }

        impl From<$name> for [Digit; CODE_LENGTH] {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        impl Index<usize> for $name {
            type Output = Digit;

            fn index(&self, position: usize) -> &Digit {
                &self.0[position]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                for digit in &self.0 {
                    write!(f, "{}", digit)?;
                }
                Ok(())
            }
        }
    };
}

code_type! {
    /// The hidden target: four distinct digits.
    Secret
}

code_type! {
    /// A submitted guess: four distinct digits that passed validation.
    Guess
}

/// The in-progress contents of the segmented input.
///
/// Each slot is either empty or holds a digit. The input layer keeps the
/// filled slots free of duplicates; this type itself does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialGuess {
    slots: [Option<Digit>; CODE_LENGTH],
}

impl PartialGuess {
    /// Create an empty partial guess.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
        }
    }

    /// Create from explicit slot contents.
    #[must_use]
    pub const fn from_slots(slots: [Option<Digit>; CODE_LENGTH]) -> Self {
        Self { slots }
    }

    /// Get the slot contents.
    #[must_use]
    pub fn slots(&self) -> &[Option<Digit>; CODE_LENGTH] {
        &self.slots
    }

    /// Get a single slot. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Digit> {
        self.slots.get(index).copied().flatten()
    }

    /// Set a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CODE_LENGTH`.
    pub fn set(&mut self, index: usize, digit: Digit) {
        self.slots[index] = Some(digit);
    }

    /// Empty a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CODE_LENGTH`.
    pub fn clear_slot(&mut self, index: usize) {
        self.slots[index] = None;
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    /// Index of the first empty slot, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if all slots are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// The slots as raw input symbols, ready for validation.
    #[must_use]
    pub fn to_symbols(&self) -> [Option<char>; CODE_LENGTH] {
        self.slots.map(|slot| slot.map(Digit::to_char))
    }
}

impl std::fmt::Display for PartialGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
