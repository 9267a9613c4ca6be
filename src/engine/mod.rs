//! Guess engine: validation, duplicate detection, scoring.
//!
//! All functions here are pure. They touch no session state and can be
//! called from any number of threads.
//!
//! - `validate` / `validate_slots`: raw input to `Guess`, or the first rule broken
//! - `would_duplicate`: per-keystroke uniqueness check for the segmented input
//! - `score`: digits present and digits in place

pub mod validate;
pub mod duplicate;
pub mod score;

pub use validate::{validate, validate_slots, ValidationError, EMPTY_SLOT};
pub use duplicate::would_duplicate;
pub use score::{score, ScoreResult};
