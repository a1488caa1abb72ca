// demos/demo.rs
use angular_mc::analytics::density::{analyze, Analysis};
use angular_mc::mc::histogram::Scoring;
use angular_mc::mc::mc_engine::{run_experiment, Execution, ExperimentConfig};
use angular_mc::math_utils::Timer;
use angular_mc::samplers::SamplerKind;
use nalgebra::Vector3;

fn print_analysis(title: &str, analysis: &Analysis) {
    println!("{}", title);
    for curve in &analysis.curves {
        println!("  integral {:<12} {:.4}", curve.name, curve.integral());
    }
    for s in &analysis.samplers {
        let p_value = s
            .fit
            .map(|fit| format!("{:.3}", fit.p_value))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {:<12} vs {:<14} max deviation {:.4}  chi2 p-value {}",
            s.kind.name(),
            format!("{:?}", s.law),
            s.max_deviation,
            p_value
        );
    }
    println!();
}

fn main() {
    println!("Running angular-mc Demo\n");

    let base = ExperimentConfig {
        iterations: 200_000,
        buckets: 200,
        samplers: vec![
            SamplerKind::UnitVector,
            SamplerKind::InUnitBall,
            SamplerKind::InHemisphere,
        ],
        ..Default::default()
    };

    // Same seed, both execution modes: the histograms must agree exactly
    let mut timer = Timer::new();
    timer.start();
    let parallel = run_experiment(&base).expect("Valid configuration");
    let parallel_ms = timer.elapsed_ms();

    let sequential_cfg = ExperimentConfig {
        execution: Execution::Sequential,
        ..base.clone()
    };
    timer.start();
    let sequential = run_experiment(&sequential_cfg).expect("Valid configuration");
    let sequential_ms = timer.elapsed_ms();

    let identical = parallel
        .iter()
        .zip(&sequential)
        .all(|(p, s)| p.histogram == s.histogram);
    println!(
        "Parallel {:.1} ms, sequential {:.1} ms, identical histograms: {}\n",
        parallel_ms, sequential_ms, identical
    );

    let analysis = analyze(&parallel, base.scoring).expect("Non-empty results");
    print_analysis("Geometric scoring, axis (0, 0, 1)", &analysis);

    // Raw dot products: the ball sampler now follows the cos³ curve
    let raw_cfg = ExperimentConfig {
        scoring: Scoring::RawInnerProduct,
        axis: Vector3::new(1.0, 1.0, 0.0),
        ..base
    };
    let raw = run_experiment(&raw_cfg).expect("Valid configuration");
    let analysis = analyze(&raw, raw_cfg.scoring).expect("Non-empty results");
    print_analysis("Raw inner-product scoring, axis (1, 1, 0)", &analysis);
}
