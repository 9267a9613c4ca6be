//! Secret generation.

use crate::core::{Digit, GameRng, Secret, SecretStrategy, CODE_LENGTH};

/// Draws secrets from the 1-9 pool.
///
/// The generator holds no randomness of its own; every call draws from the
/// RNG passed in, so seeded sessions are reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecretGenerator {
    strategy: SecretStrategy,
}

impl SecretGenerator {
    /// Create a generator using the given strategy.
    #[must_use]
    pub const fn new(strategy: SecretStrategy) -> Self {
        Self { strategy }
    }

    /// Get the strategy.
    #[must_use]
    pub const fn strategy(&self) -> SecretStrategy {
        self.strategy
    }

    /// Generate a secret of four distinct digits.
    pub fn generate(&self, rng: &mut GameRng) -> Secret {
        match self.strategy {
            SecretStrategy::Shuffle => shuffled(rng),
            SecretStrategy::DrawWithoutReplacement => drawn(rng),
        }
    }
}

fn shuffled(rng: &mut GameRng) -> Secret {
    let mut pool = Digit::ALL;
    rng.shuffle(&mut pool);
    Secret::from_digits([pool[0], pool[1], pool[2], pool[3]])
}

fn drawn(rng: &mut GameRng) -> Secret {
    let mut pool = Digit::ALL.to_vec();
    let mut digits = [Digit::ONE; CODE_LENGTH];
    for slot in &mut digits {
        let index = rng.gen_range_usize(0..pool.len());
        *slot = pool.remove(index);
    }
    Secret::from_digits(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::all_unique;

    #[test]
    fn test_generates_valid_secrets() {
        let mut rng = GameRng::new(42);
        for strategy in [SecretStrategy::Shuffle, SecretStrategy::DrawWithoutReplacement] {
            let generator = SecretGenerator::new(strategy);
            for _ in 0..500 {
                let secret = generator.generate(&mut rng);
                assert_eq!(secret.digits().len(), CODE_LENGTH);
                assert!(all_unique(secret.digits()));
                assert!(secret.iter().all(|d| (1..=9).contains(&d.value())));
            }
        }
    }

    #[test]
    fn test_same_seed_same_secret() {
        let generator = SecretGenerator::default();
        let a = generator.generate(&mut GameRng::new(7));
        let b = generator.generate(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_secrets_vary() {
        let generator = SecretGenerator::new(SecretStrategy::DrawWithoutReplacement);
        let mut rng = GameRng::new(99);
        let secrets: Vec<Secret> = (0..20).map(|_| generator.generate(&mut rng)).collect();
        assert!(secrets.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
