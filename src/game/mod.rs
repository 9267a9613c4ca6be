//! Game sessions.
//!
//! `GameState` owns everything a session needs and implements the
//! `new_game` / `submit_guess` / `reset` operations. There is no global
//! state, so any number of sessions can run side by side.

pub mod state;
pub mod history;
pub mod hint;

pub use state::{GameState, GameStatus, SubmitError};
pub use history::{History, HistoryEntry};
pub use hint::Hint;
