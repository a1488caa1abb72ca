// scripts/benchmark.rs
use angular_mc::analytics::density::analyze;
use angular_mc::math_utils::Timer;
use angular_mc::mc::mc_engine::{run_experiment, Execution, ExperimentConfig};
use angular_mc::samplers::SamplerKind;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    execution: Execution,
    workers_per_sampler: usize,
    iterations: u64,
    time_ms: f64,
    throughput_samples_per_sec: f64,
    /// Worst pointwise deviation of the unit-vector density from ½ sin θ
    max_deviation: f64,
}

fn run_sampling_benchmarks(cpu_cores: usize) -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    let mut results = Vec::new();

    let iteration_configs = [10_000u64, 100_000, 1_000_000];
    let layouts = [
        (Execution::Sequential, 1),
        (Execution::Parallel, 1),
        (Execution::Parallel, cpu_cores.max(2) / 2),
    ];

    for &iterations in &iteration_configs {
        println!("Running benchmarks with {} iterations...", iterations);

        for &(execution, workers_per_sampler) in &layouts {
            let cfg = ExperimentConfig {
                iterations,
                execution,
                workers_per_sampler,
                seed: 42,
                ..Default::default()
            };

            let mut timer = Timer::new();
            timer.start();
            let histograms = run_experiment(&cfg)?;
            let time_ms = timer.elapsed_ms();

            let analysis = analyze(&histograms, cfg.scoring)?;
            let max_deviation = analysis
                .summary(SamplerKind::UnitVector)
                .map(|s| s.max_deviation)
                .unwrap_or(f64::NAN);

            let samples = iterations * cfg.samplers.len() as u64;
            results.push(BenchmarkResult {
                execution,
                workers_per_sampler,
                iterations,
                time_ms,
                throughput_samples_per_sec: samples as f64 / (time_ms / 1000.0),
                max_deviation,
            });
        }
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Execution,Workers_per_sampler,Iterations,Time_ms,Throughput_samples_per_sec,Max_deviation"
    )?;
    for result in results {
        writeln!(
            file,
            "{:?},{},{},{:.2},{:.0},{:.6}",
            result.execution,
            result.workers_per_sampler,
            result.iterations,
            result.time_ms,
            result.throughput_samples_per_sec,
            result.max_deviation
        )?;
    }

    file.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("angular-mc Sampling Benchmark");
    println!("=============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_sampling_benchmarks(system_info.cpu_cores)?;

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<12} {:>8} {:>12} {:>12} {:>16} {:>12}",
        "Execution", "Workers", "Iterations", "Time (ms)", "Samples/s", "Max dev"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<12} {:>8} {:>12} {:>12.2} {:>16.0} {:>12.4}",
            format!("{:?}", result.execution),
            result.workers_per_sampler,
            result.iterations,
            result.time_ms,
            result.throughput_samples_per_sec,
            result.max_deviation
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    println!("\nResults saved to: {}", filename);
    println!("Run with: cargo run --bin benchmark --release");
    Ok(())
}
