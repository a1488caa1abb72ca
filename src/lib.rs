//! # angular-mc: Monte Carlo angular distributions of random directions
//!
//! Estimates, by sampling, the distribution of the angle between random
//! vectors and a fixed reference axis, and compares the empirical densities
//! with closed-form reference curves.
//!
//! ## Key Features
//!
//! - **Samplers**: exact uniform directions on the sphere, rejection-sampled
//!   points in the unit ball, and ball points folded into a hemisphere
//! - **Parallel Workers**: one private histogram per worker on the rayon pool,
//!   merged once at the end; a sequential mode replays the same streams
//! - **Analysis**: density normalization, rectangle-rule integrals,
//!   chi-square goodness of fit against the exact angular law
//! - **Reports**: CSV curves and summaries, SVG chart
//!
//! ## Quick Start
//!
//! ```rust
//! use angular_mc::analytics::density::analyze;
//! use angular_mc::mc::mc_engine::{run_experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig {
//!     iterations: 20_000,
//!     buckets: 50,
//!     ..Default::default()
//! };
//!
//! let results = run_experiment(&config).expect("Valid configuration");
//! let analysis = analyze(&results, config.scoring).expect("Non-empty results");
//! for curve in &analysis.curves {
//!     println!("{}: integral {:.2}", curve.name, curve.integral());
//! }
//! ```
//!
//! ## Mathematical Foundation
//!
//! For a direction uniform on the sphere, the angle θ to any fixed axis has
//! density ½ sin θ on [0, π]. On the plotting domain `x = θ - π/2` this is
//! the `cos(x)/2` reference curve. Scoring unnormalized ball samples by the
//! raw dot product instead yields ¾ sin³θ, the `3/4 cos³(x)` curve.

pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod output;
pub mod plot;
pub mod rng;
pub mod samplers;

pub use error::{ExperimentError, ExperimentResult};
