// src/samplers/unit_vector.rs
//! Uniform directions on the unit sphere
//!
//! # Algorithm
//!
//! Archimedes' hat-box theorem: the height `z` of a uniform point on the
//! sphere is itself uniform on [-1, 1]. Drawing the azimuth independently
//! gives an exact, rejection-free sampler:
//! ```text
//! a ~ U(0, 2π),  z ~ U(-1, 1),  r = √(1 - z²)
//! v = (r cos a, r sin a, z)
//! ```

use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

#[derive(Clone, Debug)]
pub struct UnitVector {
    azimuth: Uniform<f64>,
    height: Uniform<f64>,
}

impl UnitVector {
    pub fn new() -> Self {
        UnitVector {
            azimuth: Uniform::new(0.0, 2.0 * PI),
            height: Uniform::new(-1.0, 1.0),
        }
    }
}

impl Default for UnitVector {
    fn default() -> Self {
        UnitVector::new()
    }
}

impl Distribution<Vector3<f64>> for UnitVector {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        let a = self.azimuth.sample(rng);
        let z = self.height.sample(rng);
        let r = (1.0 - z * z).sqrt();
        Vector3::new(r * a.cos(), r * a.sin(), z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng_from_u64;

    #[test]
    fn test_samples_are_unit_length() {
        let mut rng = seed_rng_from_u64(1);
        let sampler = UnitVector::new();
        for _ in 0..10_000 {
            let v = sampler.sample(&mut rng);
            assert!((v.norm() - 1.0).abs() < 1e-9, "norm = {}", v.norm());
        }
    }

    #[test]
    fn test_height_is_uniform() {
        // Hat-box theorem: P(z > 0.5) = 1/4
        let mut rng = seed_rng_from_u64(2);
        let sampler = UnitVector::new();
        let n = 200_000;
        let above = (0..n).filter(|_| sampler.sample(&mut rng).z > 0.5).count();
        let fraction = above as f64 / n as f64;
        assert!((fraction - 0.25).abs() < 0.01, "fraction = {}", fraction);
    }
}
