use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks an index in `[0, n)` for the filler reply.
pub trait Chooser: Send + Sync {
    fn choose(&self, n: usize) -> usize;
}

pub struct RandomChooser {
    rng: Mutex<StdRng>,
}

impl RandomChooser {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..n)
    }
}

/// Always returns the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&self, _n: usize) -> usize {
        self.0
    }
}
