//! Digits and digit sets.
//!
//! ## Digit
//!
//! Type-safe digit restricted to `1..=9`. Zero is never a valid digit in
//! this game, so it cannot be represented.
//!
//! ## DigitSet
//!
//! A 9-bit membership set used for the uniqueness checks in validation and
//! for the "present anywhere in the secret" half of scoring.

use serde::{Deserialize, Serialize};

use crate::engine::ValidationError;

/// Number of digits in a secret or a guess.
pub const CODE_LENGTH: usize = 4;

/// A single digit in `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The smallest digit.
    pub const ONE: Digit = Digit(1);

    /// Every valid digit, in ascending order. This is the secret pool.
    pub const ALL: [Digit; 9] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit from its numeric value.
    ///
    /// Returns `None` for 0 and anything above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a digit from an input symbol.
    ///
    /// ```
    /// use formula4::core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
    /// assert_eq!(Digit::from_char('0'), None);
    /// assert_eq!(Digit::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '1'..='9' => Some(Self(symbol as u8 - b'0')),
            _ => None,
        }
    }

    /// Get the numeric value (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the display symbol.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(ValidationError::InvalidDigit)
    }
}

impl TryFrom<char> for Digit {
    type Error = ValidationError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Digit::from_char(symbol).ok_or(ValidationError::InvalidDigit)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Set of digits backed by a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from a sequence of digits.
    pub fn from_digits<'a>(digits: impl IntoIterator<Item = &'a Digit>) -> Self {
        let mut set = Self::new();
        for &digit in digits {
            set.insert(digit);
        }
        set
    }

    /// Insert a digit.
    ///
    /// Returns `false` if the digit was already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.0 |= digit.bit();
        !present
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Check that no digit repeats.
#[must_use]
pub fn all_unique(digits: &[Digit]) -> bool {
    let mut seen = DigitSet::new();
    digits.iter().all(|&d| seen.insert(d))
}
