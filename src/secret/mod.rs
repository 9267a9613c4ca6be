//! Secret generation.
//!
//! `SecretGenerator` picks four distinct digits from 1-9 uniformly over all
//! 3024 ordered choices, using the session's injected `GameRng`.

pub mod generator;

pub use generator::SecretGenerator;
