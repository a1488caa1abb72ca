// src/mc/mc_engine.rs
use crate::error::{validation::*, ExperimentError, ExperimentResult};
use crate::math_utils::Timer;
use crate::mc::histogram::{AngleScorer, Histogram, Scoring};
use crate::rng::RngFactory;
use crate::samplers::{Sampler, SamplerKind};
use log::{debug, info};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::Distribution;
use rayon::prelude::*;

/// How the workers are scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Execution {
    /// Every worker runs as its own task on the rayon pool
    #[default]
    Parallel,
    /// All workers are stepped round-robin on the calling thread
    Sequential,
}

#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Samples drawn per sampler
    pub iterations: u64,
    pub buckets: usize,
    /// Reference direction; normalized before use
    pub axis: Vector3<f64>,
    pub execution: Execution,
    pub seed: u64,
    /// Workers sharing the iterations of one sampler
    pub workers_per_sampler: usize,
    pub scoring: Scoring,
    pub samplers: Vec<SamplerKind>,
}

impl ExperimentConfig {
    /// Validate the experiment configuration
    pub fn validate(&self) -> ExperimentResult<()> {
        validate_iterations(self.iterations)?;
        validate_buckets(self.buckets)?;
        validate_workers(self.workers_per_sampler, self.iterations)?;

        for (name, value) in [
            ("axis.x", self.axis.x),
            ("axis.y", self.axis.y),
            ("axis.z", self.axis.z),
        ] {
            validate_finite(name, value)?;
        }
        self.unit_axis()?;

        if self.samplers.is_empty() {
            return Err(ExperimentError::InvalidConfiguration {
                field: "samplers".to_string(),
                reason: "at least one sampler is required".to_string(),
            });
        }
        for (i, kind) in self.samplers.iter().enumerate() {
            if self.samplers[..i].contains(kind) {
                return Err(ExperimentError::InvalidConfiguration {
                    field: "samplers".to_string(),
                    reason: format!("sampler '{}' listed more than once", kind.name()),
                });
            }
        }

        Ok(())
    }

    /// Reference axis scaled to unit length.
    ///
    /// The axis is divided by its largest absolute component first, so
    /// components near the overflow or subnormal range still normalize.
    pub fn unit_axis(&self) -> ExperimentResult<Vector3<f64>> {
        let scale = self.axis.amax();
        let unit = if scale.is_finite() && scale > 0.0 {
            (self.axis / scale).try_normalize(f64::EPSILON)
        } else {
            None
        };
        unit.filter(|n| (n.norm() - 1.0).abs() < 1e-12)
            .ok_or_else(|| ExperimentError::InvalidConfiguration {
                field: "axis".to_string(),
                reason: format!(
                    "({}, {}, {}) cannot be normalized to a unit vector",
                    self.axis.x, self.axis.y, self.axis.z
                ),
            })
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            iterations: 1_000_000,
            buckets: 1_000,
            axis: Vector3::new(0.0, 0.0, 1.0),
            execution: Execution::Parallel,
            seed: 12345,
            workers_per_sampler: 1,
            scoring: Scoring::Geometric,
            samplers: vec![SamplerKind::UnitVector, SamplerKind::InUnitBall],
        }
    }
}

/// One unit of work: a sampler, its share of the iterations and its RNG stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerPlan {
    pub id: u64,
    pub kind: SamplerKind,
    pub iterations: u64,
}

/// Merged result of every worker that ran one sampler
#[derive(Clone, Debug)]
pub struct SamplerHistogram {
    pub kind: SamplerKind,
    pub iterations: u64,
    pub histogram: Histogram,
}

/// Split each sampler's iterations across its workers.
///
/// Worker ids are dense and stable for a given configuration, so the RNG
/// stream of a worker does not depend on the execution mode.
pub fn plan_workers(cfg: &ExperimentConfig) -> Vec<WorkerPlan> {
    let k = cfg.workers_per_sampler as u64;
    let base = cfg.iterations / k;
    let remainder = cfg.iterations % k;

    cfg.samplers
        .iter()
        .enumerate()
        .flat_map(|(s, &kind)| {
            (0..k).map(move |w| WorkerPlan {
                id: s as u64 * k + w,
                kind,
                iterations: base + u64::from(w < remainder),
            })
        })
        .collect()
}

/// Accumulation loop: draw, score and count `iterations` samples.
pub fn run_worker<D, R>(
    sampler: &D,
    scorer: &AngleScorer,
    rng: &mut R,
    iterations: u64,
    histogram: &mut Histogram,
) where
    D: Distribution<Vector3<f64>> + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..iterations {
        let v = sampler.sample(rng);
        scorer.score(&v, histogram);
    }
}

struct WorkerState {
    plan: WorkerPlan,
    sampler: Sampler,
    rng: StdRng,
    histogram: Histogram,
}

impl WorkerState {
    fn new(plan: WorkerPlan, axis: &Vector3<f64>, factory: &RngFactory, buckets: usize) -> Self {
        WorkerState {
            plan,
            sampler: plan.kind.build(axis),
            rng: factory.create_worker_rng(plan.id),
            histogram: Histogram::new(buckets),
        }
    }
}

fn run_isolated(
    plan: WorkerPlan,
    axis: &Vector3<f64>,
    scorer: &AngleScorer,
    factory: &RngFactory,
) -> (SamplerKind, Histogram) {
    let mut state = WorkerState::new(plan, axis, factory, scorer.buckets());
    info!(
        "Started worker {} ({}, {} iterations)",
        plan.id,
        plan.kind.name(),
        plan.iterations
    );
    let timer = Timer::new();
    run_worker(
        &state.sampler,
        scorer,
        &mut state.rng,
        plan.iterations,
        &mut state.histogram,
    );
    info!(
        "Finished worker {} ({}) in {:.1} ms",
        plan.id,
        plan.kind.name(),
        timer.elapsed_ms()
    );
    (plan.kind, state.histogram)
}

fn run_interleaved(
    plans: &[WorkerPlan],
    axis: &Vector3<f64>,
    scorer: &AngleScorer,
    factory: &RngFactory,
) -> Vec<(SamplerKind, Histogram)> {
    let mut states: Vec<WorkerState> = plans
        .iter()
        .map(|&plan| WorkerState::new(plan, axis, factory, scorer.buckets()))
        .collect();
    for state in &states {
        info!(
            "Started worker {} ({}, {} iterations, sequential)",
            state.plan.id,
            state.plan.kind.name(),
            state.plan.iterations
        );
    }

    let timer = Timer::new();
    let longest = plans.iter().map(|s| s.iterations).max().unwrap_or(0);
    for step in 0..longest {
        for state in states.iter_mut() {
            if step < state.plan.iterations {
                run_worker(&state.sampler, scorer, &mut state.rng, 1, &mut state.histogram);
            }
        }
    }

    for state in &states {
        info!(
            "Finished worker {} ({}) in {:.1} ms",
            state.plan.id,
            state.plan.kind.name(),
            timer.elapsed_ms()
        );
    }
    states
        .into_iter()
        .map(|state| (state.plan.kind, state.histogram))
        .collect()
}

/// Run every worker of the experiment and merge the histograms per sampler.
///
/// # Concurrency
///
/// Workers share nothing mutable: each owns its sampler, RNG and histogram.
/// In parallel mode the rayon `collect` is the join barrier; no result is
/// merged before every worker has finished. Sequential mode replays the
/// same per-worker streams, so both modes return identical histograms for a
/// given seed.
///
/// # Returns
///
/// One `SamplerHistogram` per configured sampler, in configuration order.
pub fn run_experiment(cfg: &ExperimentConfig) -> ExperimentResult<Vec<SamplerHistogram>> {
    cfg.validate()?;
    let axis = cfg.unit_axis()?;
    let scorer = AngleScorer::new(axis, cfg.scoring, cfg.buckets);
    let factory = RngFactory::new(cfg.seed);
    let plans = plan_workers(cfg);
    debug!(
        "Planned {} workers for {} samplers (seed {})",
        plans.len(),
        cfg.samplers.len(),
        factory.base_seed()
    );

    let finished = match cfg.execution {
        Execution::Parallel => plans
            .par_iter()
            .map(|&plan| run_isolated(plan, &axis, &scorer, &factory))
            .collect::<Vec<_>>(),
        Execution::Sequential => run_interleaved(&plans, &axis, &scorer, &factory),
    };

    let results = cfg
        .samplers
        .iter()
        .map(|&kind| {
            let histogram = finished
                .iter()
                .filter(|(k, _)| *k == kind)
                .fold(Histogram::new(cfg.buckets), |acc, (_, h)| acc.merged(h));
            SamplerHistogram {
                kind,
                iterations: cfg.iterations,
                histogram,
            }
        })
        .collect();

    Ok(results)
}
