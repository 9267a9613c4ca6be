//! Per-keystroke duplicate detection.
//!
//! Whole-guess validation is authoritative. This check runs earlier, on a
//! single digit entered into one slot, so a duplicate is never stored in the
//! input at all.

use crate::core::{Digit, PartialGuess};

/// Check whether entering `digit` at `target_index` would repeat a digit
/// already held by a different slot.
///
/// The target slot itself is ignored, so re-typing the digit a slot already
/// holds is not a duplicate. An index past the last slot excludes nothing and
/// checks the whole partial guess.
///
/// ```
/// use formula4::core::{Digit, PartialGuess};
/// use formula4::engine::would_duplicate;
///
/// let five = Digit::new(5).unwrap();
/// let partial = PartialGuess::from_slots([Some(five), None, None, None]);
/// assert!(would_duplicate(five, 2, &partial));
/// assert!(!would_duplicate(five, 0, &partial));
/// ```
#[must_use]
pub fn would_duplicate(digit: Digit, target_index: usize, partial: &PartialGuess) -> bool {
    partial
        .slots()
        .iter()
        .enumerate()
        .any(|(index, &slot)| index != target_index && slot == Some(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_empty_partial_never_duplicates() {
        let partial = PartialGuess::new();
        for digit in Digit::ALL {
            for index in 0..4 {
                assert!(!would_duplicate(digit, index, &partial));
            }
        }
    }

    #[test]
    fn test_detects_other_slot() {
        let partial = PartialGuess::from_slots([Some(d(5)), None, None, None]);
        assert!(would_duplicate(d(5), 1, &partial));
        assert!(would_duplicate(d(5), 2, &partial));
        assert!(would_duplicate(d(5), 3, &partial));
        assert!(!would_duplicate(d(6), 2, &partial));
    }

    #[test]
    fn test_same_slot_is_not_duplicate() {
        let partial = PartialGuess::from_slots([Some(d(1)), Some(d(2)), None, None]);
        assert!(!would_duplicate(d(2), 1, &partial));
        assert!(would_duplicate(d(2), 0, &partial));
    }

    #[test]
    fn test_out_of_range_index_checks_everything() {
        let partial = PartialGuess::from_slots([None, None, None, Some(d(9))]);
        assert!(would_duplicate(d(9), 4, &partial));
        assert!(!would_duplicate(d(8), 4, &partial));
    }
}
