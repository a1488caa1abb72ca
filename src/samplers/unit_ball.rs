// src/samplers/unit_ball.rs
//! Uniform points inside the unit ball by rejection from the cube [-1, 1]³
//!
//! The acceptance probability is the volume ratio π/6 ≈ 0.524, so a sample
//! costs 6/π ≈ 1.91 cube draws on average. The loop has no retry cap: a cap
//! would bias the distribution.

use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

/// Expected number of cube draws per accepted sample
pub const EXPECTED_DRAWS: f64 = 6.0 / PI;

#[derive(Clone, Debug)]
pub struct InUnitBall {
    side: Uniform<f64>,
}

impl InUnitBall {
    pub fn new() -> Self {
        InUnitBall {
            side: Uniform::new(-1.0, 1.0),
        }
    }
}

impl Default for InUnitBall {
    fn default() -> Self {
        InUnitBall::new()
    }
}

impl Distribution<Vector3<f64>> for InUnitBall {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        loop {
            let v = Vector3::new(
                self.side.sample(rng),
                self.side.sample(rng),
                self.side.sample(rng),
            );
            if v.norm_squared() <= 1.0 {
                return v;
            }
        }
    }
}
