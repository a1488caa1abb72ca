// src/rng.rs
//! Random Number Generation for the sampling workers
//!
//! # Design
//!
//! Every worker owns a private generator seeded from `(base_seed, worker_id)`.
//! Two runs with the same base seed replay the same per-worker streams no
//! matter how the workers are scheduled, which is what lets the sequential
//! and parallel execution modes produce identical histograms.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG factory for reproducible per-worker streams
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create the generator owned by one worker
    pub fn create_worker_rng(&self, worker_id: u64) -> StdRng {
        seed_rng_from_u64(self.base_seed.wrapping_add(worker_id))
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
