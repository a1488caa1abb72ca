// src/analytics/density.rs
//! Reduction of the worker histograms into densities and a report
//!
//! # Normalization
//!
//! A histogram over `B` buckets of width `π/B` filled with `N` samples
//! becomes an empirical density
//! ```text
//! p̂(i) = count(i) / N · B / π
//! ```
//! so that its rectangle-rule integral over the angle domain approximates 1.
//!
//! # Goodness of Fit
//!
//! Each histogram is tested against the exact bucket probabilities of the
//! angular law its sampler should follow, using Pearson's statistic
//! ```text
//! X² = Σ (O_i - E_i)² / E_i
//! ```
//! over the buckets with `E_i >= 5`. The p-value comes from the chi-square
//! distribution with `cells - 1` degrees of freedom.

use crate::analytics::reference::{cos3_reference, cos_reference, plot_axis, AngularLaw};
use crate::error::{ExperimentError, ExperimentResult};
use crate::math_utils::{format_significant, rectangle_integral};
use crate::mc::histogram::{Histogram, Scoring};
use crate::mc::mc_engine::SamplerHistogram;
use crate::samplers::SamplerKind;
use log::info;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::f64::consts::{FRAC_PI_2, PI};

/// Buckets with a smaller expected count are left out of the chi-square sum
pub const MIN_EXPECTED_COUNT: f64 = 5.0;

/// A named `(x, y)` series on the shifted plot domain
#[derive(Clone, Debug)]
pub struct Curve {
    pub name: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn new(name: &str, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Curve {
            name: name.to_string(),
            xs,
            ys,
        }
    }

    /// Rectangle-rule integral over [-π/2, π/2]
    pub fn integral(&self) -> f64 {
        if self.ys.is_empty() {
            return 0.0;
        }
        rectangle_integral(&self.ys, PI / self.ys.len() as f64)
    }

    pub fn max_y(&self) -> f64 {
        self.ys.iter().copied().fold(0.0, f64::max)
    }
}

pub fn empirical_density(histogram: &Histogram, iterations: u64) -> Vec<f64> {
    let scale = histogram.buckets() as f64 / (iterations as f64 * PI);
    histogram.counts().iter().map(|&c| c as f64 * scale).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct GoodnessOfFit {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

/// Pearson chi-square test of `histogram` against bucket probabilities
pub fn chi_square_fit(
    histogram: &Histogram,
    probabilities: &[f64],
) -> ExperimentResult<GoodnessOfFit> {
    if probabilities.len() != histogram.buckets() {
        return Err(ExperimentError::InvalidConfiguration {
            field: "probabilities".to_string(),
            reason: format!(
                "expected {} bucket probabilities, got {}",
                histogram.buckets(),
                probabilities.len()
            ),
        });
    }

    let total = histogram.total() as f64;
    let mut statistic = 0.0;
    let mut cells = 0usize;
    for (&observed, &p) in histogram.counts().iter().zip(probabilities) {
        let expected = p * total;
        if expected < MIN_EXPECTED_COUNT {
            continue;
        }
        let diff = observed as f64 - expected;
        statistic += diff * diff / expected;
        cells += 1;
    }

    if cells < 2 {
        return Err(ExperimentError::NumericalInstability {
            method: "chi-square goodness of fit".to_string(),
            reason: format!(
                "only {} bucket(s) reach an expected count of {}",
                cells, MIN_EXPECTED_COUNT
            ),
        });
    }

    let degrees_of_freedom = cells - 1;
    let dist = ChiSquared::new(degrees_of_freedom as f64).map_err(|e| {
        ExperimentError::NumericalInstability {
            method: "chi-square goodness of fit".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(GoodnessOfFit {
        statistic,
        degrees_of_freedom,
        p_value: 1.0 - dist.cdf(statistic),
    })
}

/// Per-sampler findings
#[derive(Clone, Debug)]
pub struct SamplerSummary {
    pub kind: SamplerKind,
    pub law: AngularLaw,
    pub iterations: u64,
    pub integral: f64,
    /// Largest |p̂(i) - p(θ_mid)| over all buckets
    pub max_deviation: f64,
    /// `None` when too few buckets are populated for the test
    pub fit: Option<GoodnessOfFit>,
}

#[derive(Clone, Debug)]
pub struct Analysis {
    /// Empirical curves in sampler order, then `cos` and `cos3`
    pub curves: Vec<Curve>,
    pub samplers: Vec<SamplerSummary>,
    pub cos_integral: f64,
    pub cos3_integral: f64,
}

impl Analysis {
    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.name == name)
    }

    pub fn summary(&self, kind: SamplerKind) -> Option<&SamplerSummary> {
        self.samplers.iter().find(|s| s.kind == kind)
    }

    pub fn log_report(&self) {
        for curve in &self.curves {
            info!(
                "Integral of random function by {} = {}",
                curve.name,
                format_significant(curve.integral(), 2)
            );
        }
        for s in &self.samplers {
            match &s.fit {
                Some(fit) => info!(
                    "{} vs {:?}: max deviation {:.4}, chi2 = {:.1} (dof {}), p = {:.3}",
                    s.kind.name(),
                    s.law,
                    s.max_deviation,
                    fit.statistic,
                    fit.degrees_of_freedom,
                    fit.p_value
                ),
                None => info!(
                    "{} vs {:?}: max deviation {:.4}, too few samples for chi2",
                    s.kind.name(),
                    s.law,
                    s.max_deviation
                ),
            }
        }
    }
}

/// Normalize, integrate and test every sampler histogram.
///
/// # Returns
///
/// The empirical densities plus the `cos` and `cos3` reference curves on the
/// shared plot domain, and one `SamplerSummary` per histogram.
pub fn analyze(results: &[SamplerHistogram], scoring: Scoring) -> ExperimentResult<Analysis> {
    let buckets = match results.first() {
        Some(r) => r.histogram.buckets(),
        None => {
            return Err(ExperimentError::InvalidConfiguration {
                field: "results".to_string(),
                reason: "no sampler histograms to analyze".to_string(),
            })
        }
    };

    let xs = plot_axis(buckets);
    let step = PI / buckets as f64;
    let mut curves = Vec::with_capacity(results.len() + 2);
    let mut samplers = Vec::with_capacity(results.len());

    for r in results {
        let law = AngularLaw::for_sampler(r.kind, scoring);
        let density = empirical_density(&r.histogram, r.iterations);
        let max_deviation = xs
            .iter()
            .zip(&density)
            .map(|(&x, &y)| (y - law.pdf(x + FRAC_PI_2 + 0.5 * step)).abs())
            .fold(0.0, f64::max);

        let fit = match chi_square_fit(&r.histogram, &law.bucket_probabilities(buckets)) {
            Ok(fit) => Some(fit),
            Err(ExperimentError::NumericalInstability { .. }) => None,
            Err(e) => return Err(e),
        };

        let curve = Curve::new(r.kind.name(), xs.clone(), density);
        samplers.push(SamplerSummary {
            kind: r.kind,
            law,
            iterations: r.iterations,
            integral: curve.integral(),
            max_deviation,
            fit,
        });
        curves.push(curve);
    }

    let cos = Curve::new("cos", xs.clone(), cos_reference(&xs));
    let cos3 = Curve::new("cos3", xs.clone(), cos3_reference(&xs));
    let cos_integral = cos.integral();
    let cos3_integral = cos3.integral();
    curves.push(cos);
    curves.push(cos3);

    Ok(Analysis {
        curves,
        samplers,
        cos_integral,
        cos3_integral,
    })
}
