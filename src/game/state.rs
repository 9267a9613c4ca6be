//! Game session state.
//!
//! ## GameState
//!
//! One explicitly owned session:
//! - the current secret (never exposed except through `reveal_secret`)
//! - the guess history
//! - the `Open` / `Won` status
//! - the session RNG that secrets are drawn from
//!
//! ## State machine
//!
//! ```text
//! Open --submit (not a full match)--> Open   (history grows)
//! Open --submit (full match)-------> Won
//! Won  --submit--------------------> Won    (rejected, nothing changes)
//! Open/Won --reset-----------------> Open   (new secret, empty history)
//! ```
//!
//! Rejected submissions never modify the state. A host with several
//! threads must serialize writes to a `GameState`; the pure engine functions
//! need no such care.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use super::history::{History, HistoryEntry};
use crate::core::{GameConfig, GameRng, GameRngState, Guess, Secret};
use crate::engine::{self, ValidationError};
use crate::secret::SecretGenerator;

/// Session status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting guesses.
    #[default]
    Open,
    /// Secret cracked; waiting for a reset.
    Won,
}

/// Why a submission was not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Game already won. Press Reset to play again.")]
    AlreadyWon,
}

/// A single game session.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    generator: SecretGenerator,
    rng: GameRng,
    secret: Secret,
    history: History,
    status: GameStatus,
}

impl GameState {
    /// Start a new game.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS when unset.
    #[must_use]
    pub fn new_game(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Start a new game drawing secrets from the given RNG.
    ///
    /// `config.seed` is ignored.
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let generator = SecretGenerator::new(config.secret_strategy);
        let secret = generator.generate(&mut rng);
        debug!(seed = rng.seed(), strategy = ?config.secret_strategy, "New game");
        trace!(%secret, "Secret generated");

        Self {
            history: History::new(config.history_order),
            config,
            generator,
            rng,
            secret,
            status: GameStatus::Open,
        }
    }

    /// Validate, score and record a raw guess.
    ///
    /// See [`engine::validate()`] for the accepted text format.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<HistoryEntry, SubmitError> {
        if self.is_won() {
            debug!("Submission rejected, game already won");
            return Err(SubmitError::AlreadyWon);
        }
        let guess = engine::validate(raw).inspect_err(|error| {
            debug!(%error, "Guess rejected");
        })?;
        self.submit(guess)
    }

    /// Score and record an already validated guess.
    pub fn submit(&mut self, guess: Guess) -> Result<HistoryEntry, SubmitError> {
        if self.is_won() {
            return Err(SubmitError::AlreadyWon);
        }

        let score = engine::score(&guess, &self.secret);
        let entry = HistoryEntry::new(&guess, score);
        self.history.record(entry.clone());

        if score.is_win() {
            self.status = GameStatus::Won;
        }
        debug!(
            %guess,
            digits = score.digits_correct,
            positions = score.positions_correct,
            attempts = self.history.len(),
            "Guess scored"
        );

        Ok(entry)
    }

    /// Start over: new secret, empty history, status `Open`.
    ///
    /// Legal in any state.
    pub fn reset(&mut self) -> &GameState {
        self.secret = self.generator.generate(&mut self.rng);
        self.history.clear();
        self.status = GameStatus::Open;
        debug!("Game reset");
        trace!(secret = %self.secret, "Secret generated");
        self
    }

    // === Accessors ===

    /// Get the session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the secret has been cracked.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Get the guess history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of guesses recorded since the last reset.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current secret.
    ///
    /// For debugging and for revealing the answer; a normal UI never calls it
    /// while the game is open.
    #[must_use]
    pub fn reveal_secret(&self) -> &Secret {
        &self.secret
    }

    /// Checkpoint the RNG. Restoring it with `GameRng::from_state` replays
    /// every secret drawn after this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
