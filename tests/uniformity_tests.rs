//! Statistical tests for secret generation.
//!
//! Secrets must be uniform over all 9 x 8 x 7 x 6 = 3024 ordered choices.
//! These tests run a large, seeded sample through each strategy and check:
//! - each digit lands in each position about 1/9 of the time
//! - each digit appears in the secret about 4/9 of the time
//! - every one of the 3024 permutations shows up

use formula4::{GameRng, SecretGenerator, SecretStrategy, CODE_LENGTH};

const TRIALS: usize = 90_720; // 30 per permutation on average
const PERMUTATIONS: usize = 9 * 8 * 7 * 6;

struct Tally {
    /// counts[position][digit - 1]
    by_position: [[usize; 9]; CODE_LENGTH],
    /// Appearances of each digit anywhere in the secret.
    by_digit: [usize; 9],
    /// Hits per permutation, keyed by the secret read as a base-10 number.
    permutations: std::collections::HashMap<u16, usize>,
}

fn tally(strategy: SecretStrategy, seed: u64) -> Tally {
    let generator = SecretGenerator::new(strategy);
    let mut rng = GameRng::new(seed);
    let mut tally = Tally {
        by_position: [[0; 9]; CODE_LENGTH],
        by_digit: [0; 9],
        permutations: std::collections::HashMap::new(),
    };

    for _ in 0..TRIALS {
        let secret = generator.generate(&mut rng);
        let mut key = 0u16;
        for (position, digit) in secret.iter().enumerate() {
            let slot = usize::from(digit.value()) - 1;
            tally.by_position[position][slot] += 1;
            tally.by_digit[slot] += 1;
            key = key * 10 + u16::from(digit.value());
        }
        *tally.permutations.entry(key).or_default() += 1;
    }

    tally
}

fn assert_uniform(strategy: SecretStrategy, seed: u64) {
    let tally = tally(strategy, seed);

    // Expected 10_080 per cell, standard deviation about 95
    let per_cell = TRIALS as f64 / 9.0;
    for (position, counts) in tally.by_position.iter().enumerate() {
        for (slot, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - per_cell).abs() / per_cell;
            assert!(
                deviation < 0.05,
                "{strategy:?}: digit {} at position {position} seen {count} times",
                slot + 1
            );
        }
    }

    // Expected 40_320 per digit (4/9 of trials)
    let per_digit = TRIALS as f64 * 4.0 / 9.0;
    for (slot, &count) in tally.by_digit.iter().enumerate() {
        let deviation = (count as f64 - per_digit).abs() / per_digit;
        assert!(
            deviation < 0.03,
            "{strategy:?}: digit {} seen {count} times",
            slot + 1
        );
    }

    // Every ordered 4-subset appears, none wildly over-represented
    assert_eq!(tally.permutations.len(), PERMUTATIONS, "{strategy:?}: missing permutations");
    let per_permutation = TRIALS / PERMUTATIONS;
    let max = tally.permutations.values().copied().max().unwrap_or(0);
    assert!(max < per_permutation * 3, "{strategy:?}: permutation seen {max} times");
}

#[test]
fn test_shuffle_is_uniform() {
    assert_uniform(SecretStrategy::Shuffle, 2024);
}

#[test]
fn test_draw_is_uniform() {
    assert_uniform(SecretStrategy::DrawWithoutReplacement, 2025);
}
