//! Segmented digit input.
//!
//! Models the four-box input widget: typing into a slot, keypad fill,
//! backspace and cursor movement. Every keystroke consults
//! `engine::would_duplicate`, so a repeated digit is refused before it is
//! stored. Submission still goes through whole-guess validation.

pub mod digit_input;

pub use digit_input::{DigitInput, InputOutcome};
