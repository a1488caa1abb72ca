// src/analytics/reference.rs
//! Closed-form reference densities
//!
//! # Plot Domain
//!
//! Densities are plotted on the shifted domain `x = θ - π/2 ∈ [-π/2, π/2]`,
//! where `θ` is the angle from the reference axis. Bucket `i` starts at
//! `x_i = -π/2 + i·π/B`.
//!
//! # Reference Curves
//!
//! ```text
//! cos_ref(x)  = cos(x) / 2        ∫ cos  over [-π/2, π/2] = 2
//! cos3_ref(x) = 3/4 · cos³(x)     ∫ cos³ over [-π/2, π/2] = 4/3
//! ```
//! In angle terms `cos_ref` is ½ sin θ, the law of the angle between an
//! isotropic direction and a fixed axis. `cos3_ref` is ¾ sin³θ, the law of
//! `acos(v·n)` when `v` is uniform in the ball and not normalized.

use crate::mc::histogram::Scoring;
use crate::samplers::SamplerKind;
use std::f64::consts::{FRAC_PI_2, PI};

/// Left edges of the buckets on the shifted plot domain
pub fn plot_axis(buckets: usize) -> Vec<f64> {
    let step = PI / buckets as f64;
    (0..buckets).map(|i| -FRAC_PI_2 + i as f64 * step).collect()
}

pub fn cos_density(x: f64) -> f64 {
    x.cos() / 2.0
}

pub fn cos3_density(x: f64) -> f64 {
    0.75 * x.cos().powi(3)
}

pub fn cos_reference(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| cos_density(x)).collect()
}

pub fn cos3_reference(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| cos3_density(x)).collect()
}

/// Exact law of the scored angle θ ∈ [0, π] for a sampler/scoring pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngularLaw {
    /// ½ sin θ on [0, π]
    Isotropic,
    /// ¾ sin³θ on [0, π]
    RawBall,
    /// sin θ on [0, π/2]
    Hemisphere,
    /// 3/2 sin³θ on [0, π/2]
    RawHemisphere,
}

impl AngularLaw {
    pub fn for_sampler(kind: SamplerKind, scoring: Scoring) -> Self {
        match (kind, scoring) {
            (SamplerKind::UnitVector, _) => AngularLaw::Isotropic,
            (SamplerKind::InUnitBall, Scoring::Geometric) => AngularLaw::Isotropic,
            (SamplerKind::InUnitBall, Scoring::RawInnerProduct) => AngularLaw::RawBall,
            (SamplerKind::InHemisphere, Scoring::Geometric) => AngularLaw::Hemisphere,
            (SamplerKind::InHemisphere, Scoring::RawInnerProduct) => AngularLaw::RawHemisphere,
        }
    }

    pub fn pdf(&self, theta: f64) -> f64 {
        if !(0.0..=PI).contains(&theta) {
            return 0.0;
        }
        let s = theta.sin();
        match self {
            AngularLaw::Isotropic => 0.5 * s,
            AngularLaw::RawBall => 0.75 * s.powi(3),
            AngularLaw::Hemisphere if theta <= FRAC_PI_2 => s,
            AngularLaw::RawHemisphere if theta <= FRAC_PI_2 => 1.5 * s.powi(3),
            _ => 0.0,
        }
    }

    pub fn cdf(&self, theta: f64) -> f64 {
        let theta = theta.clamp(0.0, PI);
        let c = theta.cos();
        // ∫₀^θ ¾ sin³t dt
        let raw_ball = 0.75 * (2.0 / 3.0 - c + c.powi(3) / 3.0);
        match self {
            AngularLaw::Isotropic => 0.5 * (1.0 - c),
            AngularLaw::RawBall => raw_ball,
            AngularLaw::Hemisphere if theta < FRAC_PI_2 => 1.0 - c,
            AngularLaw::RawHemisphere if theta < FRAC_PI_2 => 2.0 * raw_ball,
            _ => 1.0,
        }
    }

    /// Probability mass of each of `buckets` equal-width buckets over [0, π]
    pub fn bucket_probabilities(&self, buckets: usize) -> Vec<f64> {
        let step = PI / buckets as f64;
        (0..buckets)
            .map(|i| {
                let lo = i as f64 * step;
                let hi = if i + 1 == buckets { PI } else { lo + step };
                (self.cdf(hi) - self.cdf(lo)).max(0.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::rectangle_integral;

    const LAWS: [AngularLaw; 4] = [
        AngularLaw::Isotropic,
        AngularLaw::RawBall,
        AngularLaw::Hemisphere,
        AngularLaw::RawHemisphere,
    ];

    #[test]
    fn test_reference_curves_integrate_to_one() {
        let buckets = 1000;
        let xs = plot_axis(buckets);
        let step = PI / buckets as f64;
        let cos_integral = rectangle_integral(&cos_reference(&xs), step);
        let cos3_integral = rectangle_integral(&cos3_reference(&xs), step);
        assert!((cos_integral - 1.0).abs() < 1e-5, "cos = {}", cos_integral);
        assert!((cos3_integral - 1.0).abs() < 1e-5, "cos3 = {}", cos3_integral);
    }

    #[test]
    fn test_plot_axis_domain() {
        let xs = plot_axis(4);
        assert_eq!(xs.len(), 4);
        assert!((xs[0] + FRAC_PI_2).abs() < 1e-15);
        assert!((xs[2]).abs() < 1e-15);
    }

    #[test]
    fn test_cdf_endpoints() {
        for law in LAWS {
            assert!(law.cdf(0.0).abs() < 1e-12, "{:?}", law);
            assert!((law.cdf(PI) - 1.0).abs() < 1e-12, "{:?}", law);
        }
        assert!((AngularLaw::Hemisphere.cdf(FRAC_PI_2 - 1e-12) - 1.0).abs() < 1e-9);
        assert!((AngularLaw::RawHemisphere.cdf(FRAC_PI_2 - 1e-12) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_probabilities_sum_to_one() {
        for law in LAWS {
            let probs = law.bucket_probabilities(333);
            let total: f64 = probs.iter().sum();
            assert!((total - 1.0).abs() < 1e-12, "{:?}: {}", law, total);
        }
    }

    #[test]
    fn test_pdf_matches_shifted_reference() {
        for &x in &[-1.2, -0.4, 0.0, 0.7, 1.5] {
            let theta = x + FRAC_PI_2;
            assert!((AngularLaw::Isotropic.pdf(theta) - cos_density(x)).abs() < 1e-12);
            assert!((AngularLaw::RawBall.pdf(theta) - cos3_density(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_law_selection() {
        assert_eq!(
            AngularLaw::for_sampler(SamplerKind::UnitVector, Scoring::RawInnerProduct),
            AngularLaw::Isotropic
        );
        assert_eq!(
            AngularLaw::for_sampler(SamplerKind::InUnitBall, Scoring::RawInnerProduct),
            AngularLaw::RawBall
        );
        assert_eq!(
            AngularLaw::for_sampler(SamplerKind::InHemisphere, Scoring::Geometric),
            AngularLaw::Hemisphere
        );
    }
}
