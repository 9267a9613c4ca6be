//! Session configuration.
//!
//! The two browser variants of the game differ only in presentation details.
//! Those details are configured here rather than forked:
//! - `SecretStrategy`: how the secret is drawn from the digit pool
//! - `HistoryOrder`: whether the newest guess is listed first or last
//! - `BackspacePolicy`: what backspace on an empty slot does
//! - `lock_on_win`: whether the input is disabled once the game is won

use serde::{Deserialize, Serialize};

/// How a secret is drawn from the 1-9 pool.
///
/// Both strategies produce every ordered 4-subset with equal probability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SecretStrategy {
    /// Fisher-Yates shuffle of the whole pool, then take the first four.
    #[default]
    Shuffle,
    /// Pick a random remaining digit four times.
    #[cfg_attr(feature = "cli", value(name = "draw"))]
    DrawWithoutReplacement,
}

/// Display order of the guess history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum HistoryOrder {
    /// Most recent guess at the top.
    #[default]
    NewestFirst,
    /// Most recent guess at the bottom.
    NewestLast,
}

/// Behavior of backspace on an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackspacePolicy {
    /// Move to the previous slot and clear it.
    #[default]
    ClearPrevious,
    /// Move to the previous slot, keeping its digit.
    MoveOnly,
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Random seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// How secrets are generated.
    pub secret_strategy: SecretStrategy,

    /// Display order of the guess history.
    pub history_order: HistoryOrder,

    /// Disable the input once the secret is cracked.
    pub lock_on_win: bool,

    /// Backspace behavior of the segmented input.
    pub backspace: BackspacePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            secret_strategy: SecretStrategy::Shuffle,
            history_order: HistoryOrder::NewestFirst,
            lock_on_win: true,
            backspace: BackspacePolicy::ClearPrevious,
        }
    }
}

impl GameConfig {
    /// Use a fixed seed for reproducible secrets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a specific secret strategy.
    #[must_use]
    pub fn with_secret_strategy(mut self, strategy: SecretStrategy) -> Self {
        self.secret_strategy = strategy;
        self
    }

    /// Use a specific history order.
    #[must_use]
    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }

    /// Set whether the input locks on win.
    #[must_use]
    pub fn with_lock_on_win(mut self, lock: bool) -> Self {
        self.lock_on_win = lock;
        self
    }

    /// Use a specific backspace policy.
    #[must_use]
    pub fn with_backspace(mut self, policy: BackspacePolicy) -> Self {
        self.backspace = policy;
        self
    }
}
