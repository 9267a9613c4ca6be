//! Segmented four-slot digit input.

use tracing::trace;

use crate::core::{BackspacePolicy, Digit, Guess, PartialGuess, CODE_LENGTH};
use crate::engine::{self, would_duplicate, ValidationError};
use crate::game::Hint;

const LAST_SLOT: usize = CODE_LENGTH - 1;

/// Result of one edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The digit was stored in `index`.
    Accepted { index: usize },
    /// The symbol was not a digit 1-9; the slot was emptied.
    Filtered { index: usize },
    /// The digit is already in another slot; `index` was emptied.
    Duplicate { index: usize, digit: Digit },
    /// A slot was emptied by backspace.
    Cleared { index: usize },
    /// Only the cursor moved.
    Moved { index: usize },
    /// Keypad press with every slot filled.
    Full,
    /// The input is locked.
    Locked,
}

impl InputOutcome {
    /// The hint to show for this outcome, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        match self {
            InputOutcome::Duplicate { .. } => Some(Hint::RepeatedDigit),
            InputOutcome::Full => Some(Hint::InputFull),
            _ => None,
        }
    }
}

/// The segmented input: four slots and a cursor.
///
/// Filled slots never hold the same digit twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitInput {
    slots: PartialGuess,
    cursor: usize,
    locked: bool,
    backspace: BackspacePolicy,
}

impl DigitInput {
    /// Create an empty input.
    #[must_use]
    pub fn new(backspace: BackspacePolicy) -> Self {
        Self {
            backspace,
            ..Self::default()
        }
    }

    /// Type a symbol into a slot.
    ///
    /// Anything but `'1'..='9'` empties the slot. A digit that is already in
    /// another slot is refused and the slot is emptied. Otherwise the digit
    /// is stored and the cursor moves to the next slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CODE_LENGTH`.
    pub fn enter(&mut self, index: usize, symbol: char) -> InputOutcome {
        assert!(index < CODE_LENGTH, "Slot index {index} out of range");
        if self.locked {
            return InputOutcome::Locked;
        }
        self.cursor = index;

        let Some(digit) = Digit::from_char(symbol) else {
            self.slots.clear_slot(index);
            return InputOutcome::Filtered { index };
        };

        if would_duplicate(digit, index, &self.slots) {
            trace!(%digit, index, "Duplicate digit refused");
            self.slots.clear_slot(index);
            return InputOutcome::Duplicate { index, digit };
        }

        self.slots.set(index, digit);
        self.cursor = (index + 1).min(LAST_SLOT);
        InputOutcome::Accepted { index }
    }

    /// Type a symbol at the cursor.
    pub fn type_symbol(&mut self, symbol: char) -> InputOutcome {
        self.enter(self.cursor, symbol)
    }

    /// Keypad press: fill the first empty slot.
    pub fn press_key(&mut self, digit: Digit) -> InputOutcome {
        if self.locked {
            return InputOutcome::Locked;
        }
        let Some(index) = self.slots.first_empty() else {
            return InputOutcome::Full;
        };

        if would_duplicate(digit, index, &self.slots) {
            trace!(%digit, index, "Duplicate digit refused");
            self.cursor = index;
            return InputOutcome::Duplicate { index, digit };
        }

        self.slots.set(index, digit);
        self.cursor = (index + 1).min(LAST_SLOT);
        InputOutcome::Accepted { index }
    }

    /// Backspace at the cursor.
    ///
    /// A filled slot is emptied. On an empty slot the cursor moves left;
    /// with `BackspacePolicy::ClearPrevious` that slot is emptied too.
    pub fn backspace(&mut self) -> InputOutcome {
        if self.locked {
            return InputOutcome::Locked;
        }

        let index = self.cursor;
        if self.slots.get(index).is_some() {
            self.slots.clear_slot(index);
            return InputOutcome::Cleared { index };
        }
        if index == 0 {
            return InputOutcome::Moved { index };
        }

        self.cursor = index - 1;
        match self.backspace {
            BackspacePolicy::ClearPrevious => {
                self.slots.clear_slot(self.cursor);
                InputOutcome::Cleared { index: self.cursor }
            }
            BackspacePolicy::MoveOnly => InputOutcome::Moved { index: self.cursor },
        }
    }

    /// Move the cursor one slot left.
    pub fn move_left(&mut self) -> InputOutcome {
        self.cursor = self.cursor.saturating_sub(1);
        InputOutcome::Moved { index: self.cursor }
    }

    /// Move the cursor one slot right.
    pub fn move_right(&mut self) -> InputOutcome {
        self.cursor = (self.cursor + 1).min(LAST_SLOT);
        InputOutcome::Moved { index: self.cursor }
    }

    /// Empty every slot and return the cursor to the first one.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = 0;
    }

    /// Refuse further edits.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Accept edits again.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Validate the current contents as a guess.
    pub fn to_guess(&self) -> Result<Guess, ValidationError> {
        engine::validate_slots(&self.to_raw())
    }

    /// The slots as raw symbols.
    #[must_use]
    pub fn to_raw(&self) -> [Option<char>; CODE_LENGTH] {
        self.slots.to_symbols()
    }

    // === Accessors ===

    /// Get the slot contents.
    #[must_use]
    pub fn slots(&self) -> &PartialGuess {
        &self.slots
    }

    /// Get the cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.is_complete()
    }

    /// Check if the input is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_enter_advances_cursor() {
        let mut input = DigitInput::default();
        assert_eq!(input.enter(0, '3'), InputOutcome::Accepted { index: 0 });
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.type_symbol('7'), InputOutcome::Accepted { index: 1 });
        assert_eq!(input.slots().to_string(), "37__");
    }

    #[test]
    fn test_cursor_stays_on_last_slot() {
        let mut input = DigitInput::default();
        input.enter(3, '9');
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_filters_zero_and_letters() {
        let mut input = DigitInput::default();
        input.enter(1, '4');
        assert_eq!(input.enter(1, '0'), InputOutcome::Filtered { index: 1 });
        assert_eq!(input.slots().get(1), None);
        assert_eq!(input.enter(2, 'x'), InputOutcome::Filtered { index: 2 });
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_refuses_duplicate() {
        let mut input = DigitInput::default();
        input.enter(0, '5');
        let outcome = input.enter(2, '5');
        assert_eq!(outcome, InputOutcome::Duplicate { index: 2, digit: d(5) });
        assert_eq!(outcome.hint(), Some(Hint::RepeatedDigit));
        assert_eq!(input.slots().to_string(), "5___");
    }

    #[test]
    fn test_retyping_same_slot_is_allowed() {
        let mut input = DigitInput::default();
        input.enter(0, '5');
        assert_eq!(input.enter(0, '5'), InputOutcome::Accepted { index: 0 });
    }

    #[test]
    fn test_keypad_fills_first_empty() {
        let mut input = DigitInput::default();
        input.enter(1, '2');
        assert_eq!(input.press_key(d(8)), InputOutcome::Accepted { index: 0 });
        assert_eq!(input.press_key(d(6)), InputOutcome::Accepted { index: 2 });
        assert_eq!(input.slots().to_string(), "826_");
        assert_eq!(input.press_key(d(2)), InputOutcome::Duplicate { index: 3, digit: d(2) });
        assert_eq!(input.press_key(d(1)), InputOutcome::Accepted { index: 3 });
        assert_eq!(input.press_key(d(4)), InputOutcome::Full);
        assert_eq!(InputOutcome::Full.hint(), Some(Hint::InputFull));
    }

    #[test]
    fn test_backspace_clear_previous() {
        let mut input = DigitInput::new(BackspacePolicy::ClearPrevious);
        input.enter(0, '1');
        input.enter(1, '2');
        assert_eq!(input.cursor(), 2);

        assert_eq!(input.backspace(), InputOutcome::Cleared { index: 1 });
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.slots().to_string(), "1___");
    }

    #[test]
    fn test_backspace_move_only() {
        let mut input = DigitInput::new(BackspacePolicy::MoveOnly);
        input.enter(0, '1');
        input.enter(1, '2');

        assert_eq!(input.backspace(), InputOutcome::Moved { index: 1 });
        assert_eq!(input.slots().to_string(), "12__");
        assert_eq!(input.backspace(), InputOutcome::Cleared { index: 1 });
        assert_eq!(input.slots().to_string(), "1___");
    }

    #[test]
    fn test_backspace_at_first_slot() {
        let mut input = DigitInput::default();
        assert_eq!(input.backspace(), InputOutcome::Moved { index: 0 });
    }

    #[test]
    fn test_arrow_movement() {
        let mut input = DigitInput::default();
        assert_eq!(input.move_left(), InputOutcome::Moved { index: 0 });
        for _ in 0..5 {
            input.move_right();
        }
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_lock() {
        let mut input = DigitInput::default();
        input.lock();
        assert!(input.is_locked());
        assert_eq!(input.enter(0, '1'), InputOutcome::Locked);
        assert_eq!(input.press_key(d(1)), InputOutcome::Locked);
        assert_eq!(input.backspace(), InputOutcome::Locked);

        input.unlock();
        assert_eq!(input.enter(0, '1'), InputOutcome::Accepted { index: 0 });
    }

    #[test]
    fn test_to_guess() {
        let mut input = DigitInput::default();
        for c in "7392".chars() {
            input.type_symbol(c);
        }
        assert!(input.is_complete());
        assert_eq!(input.to_guess().unwrap().to_string(), "7392");

        input.clear();
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.to_guess(), Err(ValidationError::IncompleteGuess));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_enter_out_of_range() {
        let mut input = DigitInput::default();
        input.enter(4, '1');
    }
}
