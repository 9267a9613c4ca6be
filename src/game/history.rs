//! Guess history.
//!
//! Append-only log of scored guesses. Uses an `im` persistent vector so a
//! session snapshot clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Guess, HistoryOrder};
use crate::engine::ScoreResult;

/// One scored guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The guess as typed, e.g. `"1234"`.
    pub guess: String,
    /// Guess digits present anywhere in the secret.
    pub digits_correct: u8,
    /// Guess digits in the right position.
    pub positions_correct: u8,
}

impl HistoryEntry {
    /// Create an entry from a guess and its score.
    #[must_use]
    pub fn new(guess: &Guess, score: ScoreResult) -> Self {
        Self {
            guess: guess.to_string(),
            digits_correct: score.digits_correct,
            positions_correct: score.positions_correct,
        }
    }

    /// The score recorded in this entry.
    #[must_use]
    pub fn score(&self) -> ScoreResult {
        ScoreResult {
            digits_correct: self.digits_correct,
            positions_correct: self.positions_correct,
        }
    }
}

/// Scored guesses in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vector<HistoryEntry>,
    order: HistoryOrder,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            entries: Vector::new(),
            order,
        }
    }

    /// Record a guess.
    pub fn record(&mut self, entry: HistoryEntry) {
        match self.order {
            HistoryOrder::NewestFirst => self.entries.push_front(entry),
            HistoryOrder::NewestLast => self.entries.push_back(entry),
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        match self.order {
            HistoryOrder::NewestFirst => self.entries.front(),
            HistoryOrder::NewestLast => self.entries.back(),
        }
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterate oldest first, regardless of display order.
    pub fn chronological(&self) -> Box<dyn Iterator<Item = &HistoryEntry> + '_> {
        match self.order {
            HistoryOrder::NewestFirst => Box::new(self.entries.iter().rev()),
            HistoryOrder::NewestLast => Box::new(self.entries.iter()),
        }
    }

    /// Number of recorded guesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no guesses are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the display order.
    #[must_use]
    pub fn order(&self) -> HistoryOrder {
        self.order
    }
}
