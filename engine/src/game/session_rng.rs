use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one game session. Keeping the seed makes bot behaviour
/// reproducible when a session needs to be replayed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform choice from a slice; `None` only for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        Some(&items[index])
    }
}
