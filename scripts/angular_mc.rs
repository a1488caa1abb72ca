// scripts/angular_mc.rs
use angular_mc::analytics::density::analyze;
use angular_mc::mc::histogram::Scoring;
use angular_mc::mc::mc_engine::{run_experiment, Execution, ExperimentConfig};
use angular_mc::math_utils::Timer;
use angular_mc::output;
use angular_mc::plot::render_density_plot;
use angular_mc::samplers::SamplerKind;
use angular_mc::ExperimentError;
use clap::{ArgAction, Parser};
use log::{error, info};
use nalgebra::Vector3;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Monte Carlo angular densities of random sphere and ball samplers")]
struct Args {
    /// Samples drawn per sampler
    #[arg(long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Equal-width angle buckets over [0, π]
    #[arg(long, default_value_t = 1_000)]
    buckets: usize,

    /// Run workers concurrently (false: sequential interleaving)
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    parallel: bool,

    /// Render the density chart
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    plot: bool,

    /// Base seed of the per-worker RNG streams
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Workers sharing the iterations of each sampler
    #[arg(long, default_value_t = 1)]
    workers_per_sampler: usize,

    /// Reference axis as x,y,z
    #[arg(long, default_value = "0,0,1", value_parser = parse_axis, allow_hyphen_values = true)]
    axis: Vector3<f64>,

    /// Score by the raw dot product instead of the normalized one
    #[arg(long)]
    raw_dot: bool,

    /// Add the hemisphere sampler
    #[arg(long)]
    hemisphere: bool,

    /// Directory for CSV reports and the chart
    #[arg(long, default_value = "target/angular-mc")]
    output: PathBuf,
}

fn parse_axis(s: &str) -> Result<Vector3<f64>, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{}': {}", p, e)))
        .collect::<Result<Vec<f64>, String>>()?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated components, got {}", parts.len())),
    }
}

impl Args {
    fn config(&self) -> ExperimentConfig {
        let mut samplers = vec![SamplerKind::UnitVector, SamplerKind::InUnitBall];
        if self.hemisphere {
            samplers.push(SamplerKind::InHemisphere);
        }
        ExperimentConfig {
            iterations: self.iterations,
            buckets: self.buckets,
            axis: self.axis,
            execution: if self.parallel {
                Execution::Parallel
            } else {
                Execution::Sequential
            },
            seed: self.seed,
            workers_per_sampler: self.workers_per_sampler,
            scoring: if self.raw_dot {
                Scoring::RawInnerProduct
            } else {
                Scoring::Geometric
            },
            samplers,
        }
    }
}

fn io_error(path: &std::path::Path, e: std::io::Error) -> ExperimentError {
    ExperimentError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let res = run(Args::parse());
    if let Err(e) = &res {
        error!("{}", e);
    }
    res
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let cfg = args.config();
    info!(
        "Running {} iterations per sampler into {} buckets ({:?}, {:?} scoring)",
        cfg.iterations, cfg.buckets, cfg.execution, cfg.scoring
    );

    let timer = Timer::new();
    let results = run_experiment(&cfg)?;
    info!("Sampling finished in {:.1} ms", timer.elapsed_ms());

    let analysis = analyze(&results, cfg.scoring)?;
    analysis.log_report();

    std::fs::create_dir_all(&args.output).map_err(|e| io_error(&args.output, e))?;

    let curves_path = args.output.join("curves.csv");
    output::write_curves_to_csv(&curves_path, &analysis.curves)
        .map_err(|e| io_error(&curves_path, e))?;
    let summary_path = args.output.join("summary.csv");
    output::write_summary_to_csv(&summary_path, &output::summary_rows(&analysis))
        .map_err(|e| io_error(&summary_path, e))?;
    info!(
        "Wrote {} and {}",
        curves_path.display(),
        summary_path.display()
    );

    if args.plot {
        let plot_path = args.output.join("densities.svg");
        render_density_plot(&plot_path, &analysis.curves)?;
        info!("Saved density plot to {}", plot_path.display());
    }

    Ok(())
}
