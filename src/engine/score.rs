//! Scoring a guess against the secret.

use serde::{Deserialize, Serialize};

use crate::core::{DigitSet, Guess, Secret, CODE_LENGTH};

/// Result of scoring one guess.
///
/// Invariant: `positions_correct <= digits_correct <= 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Guess digits that appear anywhere in the secret.
    pub digits_correct: u8,
    /// Guess digits at the same index as in the secret.
    pub positions_correct: u8,
}

impl ScoreResult {
    /// Create a score.
    ///
    /// # Panics
    ///
    /// Panics if the counts break `positions <= digits <= 4`.
    #[must_use]
    pub fn new(digits_correct: u8, positions_correct: u8) -> Self {
        let result = Self {
            digits_correct,
            positions_correct,
        };
        assert!(result.is_consistent(), "Inconsistent score: {result:?}");
        result
    }

    /// Check the count invariant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.positions_correct <= self.digits_correct
            && usize::from(self.digits_correct) <= CODE_LENGTH
    }

    /// Check if every position matched.
    #[must_use]
    pub fn is_win(&self) -> bool {
        usize::from(self.positions_correct) == CODE_LENGTH
    }
}

/// Score a guess against the secret.
///
/// ```
/// use formula4::core::{Digit, Secret};
/// use formula4::engine::{score, validate};
///
/// let secret = Secret::from_digits([3, 7, 1, 9].map(|v| Digit::new(v).unwrap()));
/// let result = score(&validate("7392").unwrap(), &secret);
/// assert_eq!((result.digits_correct, result.positions_correct), (3, 0));
/// ```
#[must_use]
pub fn score(guess: &Guess, secret: &Secret) -> ScoreResult {
    let secret_digits = DigitSet::from_digits(secret.digits());

    let digits_correct = guess.iter().filter(|&d| secret_digits.contains(d)).count();
    let positions_correct = guess
        .iter()
        .zip(secret.iter())
        .filter(|(g, s)| g == s)
        .count();

    let result = ScoreResult {
        digits_correct: digits_correct as u8,
        positions_correct: positions_correct as u8,
    };
    debug_assert!(result.is_consistent(), "Inconsistent score: {result:?}");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    fn secret(values: [u8; 4]) -> Secret {
        Secret::from_digits(values.map(|v| Digit::new(v).unwrap()))
    }

    fn guess(values: [u8; 4]) -> Guess {
        Guess::from_digits(values.map(|v| Digit::new(v).unwrap()))
    }

    #[test]
    fn test_no_position_matches() {
        let result = score(&guess([7, 3, 9, 2]), &secret([3, 7, 1, 9]));
        assert_eq!(result, ScoreResult::new(3, 0));
        assert!(!result.is_win());
    }

    #[test]
    fn test_exact_match_wins() {
        let result = score(&guess([3, 7, 1, 9]), &secret([3, 7, 1, 9]));
        assert_eq!(result, ScoreResult::new(4, 4));
        assert!(result.is_win());
    }

    #[test]
    fn test_disjoint() {
        let result = score(&guess([1, 2, 3, 4]), &secret([5, 6, 7, 8]));
        assert_eq!(result, ScoreResult::new(0, 0));
    }

    #[test]
    fn test_partial_matches() {
        // 1 and 2 in place, 4 present elsewhere
        let result = score(&guess([1, 2, 4, 9]), &secret([1, 2, 3, 4]));
        assert_eq!(result, ScoreResult::new(3, 2));

        // All digits present, all misplaced
        let result = score(&guess([4, 3, 2, 1]), &secret([1, 2, 3, 4]));
        assert_eq!(result, ScoreResult::new(4, 0));
    }

    #[test]
    fn test_consistency() {
        assert!(ScoreResult { digits_correct: 2, positions_correct: 1 }.is_consistent());
        assert!(!ScoreResult { digits_correct: 1, positions_correct: 2 }.is_consistent());
        assert!(!ScoreResult { digits_correct: 5, positions_correct: 0 }.is_consistent());
    }

    #[test]
    #[should_panic(expected = "Inconsistent score")]
    fn test_new_rejects_inconsistent() {
        let _ = ScoreResult::new(1, 3);
    }
}
