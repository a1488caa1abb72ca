// src/samplers/sampler.rs
use super::hemisphere::InHemisphere;
use super::unit_ball::InUnitBall;
use super::unit_vector::UnitVector;
use nalgebra::Vector3;
use rand::Rng;
use rand_distr::Distribution;

/// The generators an experiment can run, one histogram per kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    /// Uniform direction on the sphere surface
    UnitVector,
    /// Uniform point inside the unit ball, not normalized
    InUnitBall,
    /// Ball point flipped into the hemisphere of the reference axis
    InHemisphere,
}

impl SamplerKind {
    pub fn name(&self) -> &'static str {
        match self {
            SamplerKind::UnitVector => "unit_vector",
            SamplerKind::InUnitBall => "unit_ball",
            SamplerKind::InHemisphere => "hemisphere",
        }
    }

    /// Instantiate the sampler; `axis` must be unit length.
    pub fn build(&self, axis: &Vector3<f64>) -> Sampler {
        match self {
            SamplerKind::UnitVector => Sampler::UnitVector(UnitVector::new()),
            SamplerKind::InUnitBall => Sampler::InUnitBall(InUnitBall::new()),
            SamplerKind::InHemisphere => Sampler::InHemisphere(InHemisphere::new(*axis)),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Sampler {
    UnitVector(UnitVector),
    InUnitBall(InUnitBall),
    InHemisphere(InHemisphere),
}

impl Distribution<Vector3<f64>> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        match self {
            Sampler::UnitVector(s) => s.sample(rng),
            Sampler::InUnitBall(s) => s.sample(rng),
            Sampler::InHemisphere(s) => s.sample(rng),
        }
    }
}
