// tests/integration_test.rs
use angular_mc::analytics::density::analyze;
use angular_mc::analytics::reference::AngularLaw;
use angular_mc::mc::histogram::Scoring;
use angular_mc::mc::mc_engine::{run_experiment, ExperimentConfig};
use angular_mc::samplers::SamplerKind;
use nalgebra::Vector3;

#[test]
fn test_default_experiment_integrals() {
    let cfg = ExperimentConfig {
        iterations: 1_000_000,
        buckets: 1_000,
        seed: 42,
        ..Default::default()
    };

    let results = run_experiment(&cfg).expect("Valid configuration");
    for r in &results {
        assert_eq!(r.histogram.total(), cfg.iterations);
    }

    let analysis = analyze(&results, cfg.scoring).expect("Non-empty results");
    for curve in &analysis.curves {
        println!("Integral of random function by {} = {:.4}", curve.name, curve.integral());
        assert!(
            (curve.integral() - 1.0).abs() < 0.02,
            "Integral of {} is {}",
            curve.name,
            curve.integral()
        );
    }
    assert!((analysis.cos_integral - 1.0).abs() < 1e-4);
    assert!((analysis.cos3_integral - 1.0).abs() < 1e-4);

    // At 1000 buckets a bucket holds ~1600 samples near θ = π/2, so the
    // density noise is ~0.013 per bucket and the maximum over 1000 buckets
    // sits around 0.045.
    for kind in [SamplerKind::UnitVector, SamplerKind::InUnitBall] {
        let summary = analysis.summary(kind).expect("Sampler was run");
        assert_eq!(summary.law, AngularLaw::Isotropic);
        assert!(
            summary.max_deviation < 0.06,
            "{} deviates from cos(x)/2 by {} at {} buckets",
            kind.name(),
            summary.max_deviation,
            cfg.buckets
        );
    }
}

#[test]
fn test_unit_vector_tracks_cos_reference() {
    let cfg = ExperimentConfig {
        iterations: 1_000_000,
        buckets: 200,
        seed: 43,
        ..Default::default()
    };

    let results = run_experiment(&cfg).expect("Valid configuration");
    let analysis = analyze(&results, cfg.scoring).expect("Non-empty results");

    for kind in [SamplerKind::UnitVector, SamplerKind::InUnitBall] {
        let summary = analysis.summary(kind).expect("Sampler was run");
        println!(
            "{}: max deviation {:.4}, p = {:?}",
            kind.name(),
            summary.max_deviation,
            summary.fit.map(|f| f.p_value)
        );
        assert_eq!(summary.law, AngularLaw::Isotropic);
        assert!(
            summary.max_deviation < 0.05,
            "{} deviates from cos(x)/2 by {}",
            kind.name(),
            summary.max_deviation
        );
        let fit = summary.fit.expect("Enough samples for chi-square");
        assert!(fit.p_value > 1e-4, "{} rejected: {:?}", kind.name(), fit);
    }

    // Empirical curve and the cos reference share the plot domain
    let empirical = analysis.curve("unit_vector").expect("Curve present");
    let reference = analysis.curve("cos").expect("Curve present");
    assert_eq!(empirical.xs, reference.xs);
    let worst = empirical
        .ys
        .iter()
        .zip(&reference.ys)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    assert!(worst < 0.05, "unit_vector vs cos reference: {}", worst);
}

#[test]
fn test_raw_dot_ball_tracks_cos3_reference() {
    let cfg = ExperimentConfig {
        iterations: 1_000_000,
        buckets: 200,
        seed: 44,
        scoring: Scoring::RawInnerProduct,
        samplers: vec![SamplerKind::InUnitBall],
        ..Default::default()
    };

    let results = run_experiment(&cfg).expect("Valid configuration");
    let analysis = analyze(&results, cfg.scoring).expect("Non-empty results");
    let summary = analysis
        .summary(SamplerKind::InUnitBall)
        .expect("Sampler was run");

    assert_eq!(summary.law, AngularLaw::RawBall);
    assert!(
        summary.max_deviation < 0.05,
        "raw-dot ball deviates from 3/4 cos³ by {}",
        summary.max_deviation
    );
    let fit = summary.fit.expect("Enough samples for chi-square");
    assert!(fit.p_value > 1e-4, "raw-dot ball rejected: {:?}", fit);

    // ... and is clearly not the isotropic law
    let isotropic = angular_mc::analytics::density::chi_square_fit(
        &results[0].histogram,
        &AngularLaw::Isotropic.bucket_probabilities(cfg.buckets),
    )
    .expect("Valid histogram");
    assert!(isotropic.p_value < 1e-6, "p = {}", isotropic.p_value);
}

#[test]
fn test_hemisphere_along_tilted_axis() {
    let cfg = ExperimentConfig {
        iterations: 500_000,
        buckets: 100,
        seed: 45,
        axis: Vector3::new(2.0, -1.0, 2.0),
        samplers: vec![SamplerKind::InHemisphere],
        ..Default::default()
    };

    let results = run_experiment(&cfg).expect("Valid configuration");
    let counts = results[0].histogram.counts();
    assert!(
        counts[cfg.buckets / 2..].iter().all(|&c| c == 0),
        "hemisphere samples scored beyond π/2"
    );

    let analysis = analyze(&results, cfg.scoring).expect("Non-empty results");
    let summary = analysis
        .summary(SamplerKind::InHemisphere)
        .expect("Sampler was run");
    assert_eq!(summary.law, AngularLaw::Hemisphere);
    assert!(summary.max_deviation < 0.1, "{}", summary.max_deviation);
    assert!((summary.integral - 1.0).abs() < 1e-9);
}
