//! Deterministic random number generation.
//!
//! Every game is reproducible from a `u64` seed. `fork` derives a fresh,
//! deterministic stream for the next deal so a session can be replayed
//! redeal-by-redeal from its original seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for shuffling.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence; used for
    /// redeals so every game in a session is reproducible.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut data1: Vec<_> = (0..50).collect();
        let mut data2 = data1.clone();
        rng1.shuffle(&mut data1);
        rng2.shuffle(&mut data2);

        assert_eq!(data1, data2);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut data1: Vec<_> = (0..50).collect();
        let mut data2 = data1.clone();
        rng1.shuffle(&mut data1);
        rng2.shuffle(&mut data2);

        assert_ne!(data1, data2);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<_> = (0..20).collect();

        rng.shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_fork_produces_different_stream() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let mut data1: Vec<_> = (0..50).collect();
        let mut data2 = data1.clone();
        rng.shuffle(&mut data1);
        forked.shuffle(&mut data2);

        assert_ne!(data1, data2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }
}
