//! Randomness used by move resolution, capture and move choice.
//!
//! Every draw carries a short reason string. Scripted sources use it to report
//! which draw ran dry, and the trace log records it for every draw.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait BattleRng {
    /// Uniform draw in [0, 1).
    fn next_unit(&mut self, reason: &str) -> f64;

    /// Uniform integer in [0, bound). Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32, reason: &str) -> u32 {
        if bound == 0 {
            return 0;
        }
        let scaled = (self.next_unit(reason) * bound as f64).floor() as u32;
        scaled.min(bound - 1)
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    /// The ambient thread-local generator.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource<StdRng> {
    /// Reproducible generator for replays and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BattleRng for RandomSource<R> {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let value: f64 = self.rng.random();
        tracing::trace!(value, reason, "rng draw");
        value
    }

    fn next_below(&mut self, bound: u32, reason: &str) -> u32 {
        if bound == 0 {
            return 0;
        }
        let value = self.rng.random_range(0..bound);
        tracing::trace!(value, bound, reason, "rng draw");
        value
    }
}

/// Replays a fixed sequence of unit draws. Panics, naming the draw, once the
/// script is exhausted.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl BattleRng for TurnRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_draws_replay_in_order() {
        let mut rng = TurnRng::new_for_test(vec![0.1, 0.99, 0.5]);
        assert_eq!(rng.next_unit("first"), 0.1);
        assert_eq!(rng.next_below(3, "second"), 2);
        assert_eq!(rng.next_below(4, "third"), 2);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "accuracy")]
    fn test_exhausted_script_names_the_draw() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.next_unit("accuracy");
    }

    #[test]
    fn test_zero_bound_draws_nothing() {
        let mut rng = TurnRng::new_for_test(vec![]);
        assert_eq!(rng.next_below(0, "empty"), 0);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);
        for _ in 0..20 {
            let value = a.next_unit("unit");
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, b.next_unit("unit"));
            assert!(a.next_below(3, "below") < 3);
            b.next_below(3, "below");
        }
    }
}
