// src/samplers/hemisphere.rs
//! Ball samples folded into the hemisphere of a normal vector

use super::unit_ball::InUnitBall;
use nalgebra::Vector3;
use rand::Rng;
use rand_distr::Distribution;

#[derive(Clone, Debug)]
pub struct InHemisphere {
    ball: InUnitBall,
    normal: Vector3<f64>,
}

impl InHemisphere {
    pub fn new(normal: Vector3<f64>) -> Self {
        InHemisphere {
            ball: InUnitBall::new(),
            normal,
        }
    }
}

impl Distribution<Vector3<f64>> for InHemisphere {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        let v = self.ball.sample(rng);
        if v.dot(&self.normal) > 0.0 {
            v
        } else {
            -v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng_from_u64;

    #[test]
    fn test_samples_face_the_normal() {
        let mut rng = seed_rng_from_u64(5);
        let normal = Vector3::new(1.0, -1.0, 0.5).normalize();
        let sampler = InHemisphere::new(normal);
        for _ in 0..10_000 {
            let v = sampler.sample(&mut rng);
            assert!(v.norm() <= 1.0);
            assert!(v.dot(&normal) >= 0.0, "v = {:?}", v);
        }
    }
}
